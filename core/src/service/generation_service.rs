use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::model::entry::{Entry, EntryKey};
use crate::model::stats::Totals;
use crate::repository::file::{self, with_default_extension};
use crate::repository::EntryRepository;
use crate::service::report::{chart_data, ChartData};
use crate::store::RecordStore;
use crate::time;

/// Application state: the record store plus the repository it writes through to.
pub struct GenerationService<R: EntryRepository> {
    repo: R,
    store: RecordStore,
}

impl<R: EntryRepository> GenerationService<R> {
    /// Loads the default data file into a fresh store.
    pub fn open(repo: R) -> Result<Self> {
        let mut store = RecordStore::new();
        store.extend(repo.load()?);
        Ok(Self { repo, store })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Records a reading for today.
    pub fn add_entry(&mut self, diesel: &str, gas: &str, hfo: &str) -> Result<EntryKey> {
        self.add_entry_on(&time::today(), diesel, gas, hfo)
    }

    /// Validates, inserts, then rewrites the data file. A failed write leaves the entry in memory.
    pub fn add_entry_on(&mut self, date: &str, diesel: &str, gas: &str, hfo: &str) -> Result<EntryKey> {
        let key = self
            .store
            .add(date, diesel, gas, hfo)
            .inspect_err(|e| warn!(error = %e, "Rejected entry"))?;
        info!(key = %key, diesel, gas, hfo, "Added entry");
        self.persist()?;
        Ok(key)
    }

    pub fn list_sorted(&self) -> Vec<Entry> {
        self.store.list_sorted()
    }

    pub fn totals(&self) -> Result<Totals> {
        self.store.totals()
    }

    /// `None` when there is nothing to plot.
    pub fn chart(&self) -> Result<Option<ChartData>> {
        chart_data(&self.store)
    }

    /// Merges a CSV file into the store and rewrites the data file.
    /// The file is read in full first, so a malformed row appends nothing.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let rows = file::load(path)?;
        let count = self.store.extend(rows);
        info!(path = %path.display(), count, "Imported entries");
        self.persist()?;
        Ok(count)
    }

    /// Writes the store to `path` (`.csv` is added when it has no extension) and returns the final path.
    pub fn export_to(&self, path: &Path) -> Result<PathBuf> {
        let path = with_default_extension(path);
        file::save(&path, &self.store.rows())?;
        info!(path = %path.display(), count = self.store.len(), "Exported entries");
        Ok(path)
    }

    fn persist(&self) -> Result<()> {
        self.repo.save(&self.store.rows())
    }
}
