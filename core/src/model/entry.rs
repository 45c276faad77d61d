use serde::{Deserialize, Serialize};
use std::fmt;

/// The three quantities recorded for each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
    Diesel,
    Gas,
    Hfo,
}

impl Fuel {
    pub const ALL: [Fuel; 3] = [Fuel::Diesel, Fuel::Gas, Fuel::Hfo];

    /// CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Fuel::Diesel => "diesel",
            Fuel::Gas => "gas",
            Fuel::Hfo => "hfo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fuel::Diesel => "Diesel (L)",
            Fuel::Gas => "Gas Engine (kWh)",
            Fuel::Hfo => "HFO (L)",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One daily reading. Quantities keep the literal text they were entered or loaded with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: String,
    pub diesel: String,
    pub gas: String,
    pub hfo: String,
}

impl Entry {
    pub fn new(
        date: impl Into<String>,
        diesel: impl Into<String>,
        gas: impl Into<String>,
        hfo: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            diesel: diesel.into(),
            gas: gas.into(),
            hfo: hfo.into(),
        }
    }

    pub fn quantity(&self, fuel: Fuel) -> &str {
        match fuel {
            Fuel::Diesel => &self.diesel,
            Fuel::Gas => &self.gas,
            Fuel::Hfo => &self.hfo,
        }
    }
}

/// In-memory handle for an entry, `"{date}_{count}"`. Never written to disk.
/// `count` is the entry's position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    text: String,
    count: usize,
}

impl EntryKey {
    pub fn new(date: &str, count: usize) -> Self {
        Self {
            text: format!("{}_{}", date, count),
            count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(EntryKey::new("2024-01-01", 0).as_str(), "2024-01-01_0");
        assert_eq!(EntryKey::new("2024-01-01", 12).to_string(), "2024-01-01_12");
        assert_eq!(EntryKey::new("2024-01-01", 12).count(), 12);
    }

    #[test]
    fn test_quantity_by_fuel() {
        let entry = Entry::new("2024-01-01", "10", "20.5", "3");
        assert_eq!(entry.quantity(Fuel::Diesel), "10");
        assert_eq!(entry.quantity(Fuel::Gas), "20.5");
        assert_eq!(entry.quantity(Fuel::Hfo), "3");
    }
}
