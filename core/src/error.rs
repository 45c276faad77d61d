use thiserror::Error;

use crate::model::entry::Fuel;

/// Rejection of a manually entered reading. Nothing is stored when this is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("All fields are required ({0} is empty)")]
    MissingField(Fuel),

    #[error("Invalid numeric value for {field}: '{value}'")]
    NotNumeric { field: Fuel, value: String },

    #[error("{field} must not be negative: '{value}'")]
    Negative { field: Fuel, value: String },
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {key} has a non-numeric {field}: '{value}'")]
    NotNumeric {
        key: String,
        field: Fuel,
        value: String,
    },

    #[error("Entry {key} has an invalid date: '{value}'")]
    InvalidDate { key: String, value: String },
}

impl GenerationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
