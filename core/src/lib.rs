pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;
pub mod time;

pub use config::Config;
pub use error::{GenerationError, Result, ValidationError};
pub use model::entry::{Entry, EntryKey, Fuel};
pub use model::stats::{format_total, Totals};
pub use repository::{EntryRepository, FileEntryRepository};
pub use service::generation_service::GenerationService;
pub use service::report::{ChartData, ChartSeries};
pub use store::RecordStore;
