use serde::{Deserialize, Serialize};

use crate::model::entry::Fuel;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub diesel: f64,
    pub gas: f64,
    pub hfo: f64,
}

impl Totals {
    pub fn add(&mut self, fuel: Fuel, value: f64) {
        match fuel {
            Fuel::Diesel => self.diesel += value,
            Fuel::Gas => self.gas += value,
            Fuel::Hfo => self.hfo += value,
        }
    }

    pub fn get(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::Diesel => self.diesel,
            Fuel::Gas => self.gas,
            Fuel::Hfo => self.hfo,
        }
    }

    /// `(label, formatted total)` pairs in display order.
    pub fn lines(&self) -> Vec<(String, String)> {
        Fuel::ALL
            .iter()
            .map(|&fuel| (format!("Total {}", fuel.label()), format_total(self.get(fuel))))
            .collect()
    }
}

/// Whole numbers keep one decimal place so `15` reads as `15.0`.
pub fn format_total(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut totals = Totals::default();
        totals.add(Fuel::Diesel, 10.0);
        totals.add(Fuel::Diesel, 2.5);
        totals.add(Fuel::Hfo, 1.0);
        assert_eq!(totals.get(Fuel::Diesel), 12.5);
        assert_eq!(totals.get(Fuel::Gas), 0.0);
        assert_eq!(totals.get(Fuel::Hfo), 1.0);
    }

    #[test]
    fn test_lines() {
        let totals = Totals { diesel: 15.0, gas: 2.25, hfo: 0.0 };
        let lines = totals.lines();
        assert_eq!(lines[0], ("Total Diesel (L)".to_string(), "15.0".to_string()));
        assert_eq!(lines[1], ("Total Gas Engine (kWh)".to_string(), "2.25".to_string()));
        assert_eq!(lines[2], ("Total HFO (L)".to_string(), "0.0".to_string()));
    }
}
