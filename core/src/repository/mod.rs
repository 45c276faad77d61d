pub mod file;
pub mod traits;

// Re-export
pub use file::{FileEntryRepository, DEFAULT_FILE_NAME};
pub use traits::EntryRepository;
