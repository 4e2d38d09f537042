use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelatoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Configuration error in {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

impl RelatoError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        RelatoError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Field name of a validation or configuration failure, if this is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            RelatoError::ValidationError { field, .. } => Some(field),
            RelatoError::ConfigError { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelatoError>;
