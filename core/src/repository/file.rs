use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::model::entry::{Entry, Fuel};
use crate::repository::traits::EntryRepository;

pub const DEFAULT_FILE_NAME: &str = "generation_data.csv";
pub const EXPORT_EXTENSION: &str = "csv";

fn header() -> [&'static str; 4] {
    ["date", Fuel::Diesel.column(), Fuel::Gas.column(), Fuel::Hfo.column()]
}

/// Writes `entries` as CSV, replacing whatever is at `path`. The header is written even with no rows.
pub fn save(path: &Path, entries: &[Entry]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header())?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = entries.len(), "Rewrote CSV file");
    Ok(())
}

/// Reads CSV rows by column name. A missing file is empty; any malformed row fails the whole read.
pub fn load(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        debug!(path = %path.display(), "No CSV file, starting empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let entry: Entry = row?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Appends `.csv` when the chosen export path has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(EXPORT_EXTENSION);
    }
    path
}

/// The default data file. Rewritten in full on every save.
#[derive(Clone, Debug)]
pub struct FileEntryRepository {
    file_path: PathBuf,
}

impl FileEntryRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        FileEntryRepository {
            file_path: file_path.into(),
        }
    }
}

impl EntryRepository for FileEntryRepository {
    fn load(&self) -> Result<Vec<Entry>> {
        let entries = load(&self.file_path)?;
        info!(path = %self.file_path.display(), count = entries.len(), "Loaded entries");
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        save(&self.file_path, entries)
    }
}
