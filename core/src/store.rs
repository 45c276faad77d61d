use crate::error::{GenerationError, Result, ValidationError};
use crate::input::{parse_number, validate_quantities};
use crate::model::entry::{Entry, EntryKey, Fuel};
use crate::model::stats::Totals;

/// In-memory collection of entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    entries: Vec<(EntryKey, Entry)>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates a manual reading and inserts it. On error the store is unchanged.
    pub fn add(
        &mut self,
        date: &str,
        diesel: &str,
        gas: &str,
        hfo: &str,
    ) -> std::result::Result<EntryKey, ValidationError> {
        validate_quantities(diesel, gas, hfo)?;
        Ok(self.insert(Entry::new(date, diesel, gas, hfo)))
    }

    /// Inserts without validation, keyed by the current size.
    /// The store never shrinks, so a new key's count is always unused.
    pub fn insert(&mut self, entry: Entry) -> EntryKey {
        let key = EntryKey::new(&entry.date, self.entries.len());
        self.entries.push((key.clone(), entry));
        key
    }

    /// Appends loaded or imported rows as-is. Returns how many were appended.
    pub fn extend<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = Entry>,
    {
        let before = self.entries.len();
        for row in rows {
            self.insert(row);
        }
        self.entries.len() - before
    }

    pub fn get(&self, key: &EntryKey) -> Option<&Entry> {
        self.entries
            .get(key.count())
            .filter(|(k, _)| k == key)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntryKey, &Entry)> {
        self.entries.iter().map(|(k, e)| (k, e))
    }

    /// Entries in insertion order, the order they are written to disk.
    pub fn rows(&self) -> Vec<Entry> {
        self.entries.iter().map(|(_, e)| e.clone()).collect()
    }

    /// Newest first. Dates compare as strings; equal dates keep insertion order.
    pub fn list_sorted(&self) -> Vec<Entry> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    pub fn totals(&self) -> Result<Totals> {
        let mut totals = Totals::default();
        for (key, entry) in &self.entries {
            for fuel in Fuel::ALL {
                totals.add(fuel, stored_quantity(key, entry, fuel)?);
            }
        }
        Ok(totals)
    }
}

/// Parses a stored quantity. Stored values were never re-validated, so this can fail.
pub fn stored_quantity(key: &EntryKey, entry: &Entry, fuel: Fuel) -> Result<f64> {
    let raw = entry.quantity(fuel);
    parse_number(raw).ok_or_else(|| GenerationError::NotNumeric {
        key: key.to_string(),
        field: fuel,
        value: raw.to_string(),
    })
}
