use crate::error::Result;
use crate::model::entry::Entry;

pub trait EntryRepository {
    /// Reads every stored row. A missing backing file reads as empty.
    fn load(&self) -> Result<Vec<Entry>>;
    /// Replaces the stored rows with `entries`.
    fn save(&self, entries: &[Entry]) -> Result<()>;
}
