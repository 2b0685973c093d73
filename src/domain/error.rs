use std::io;

use thiserror::Error;

/// Library-wide error type for msforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Zip serialization failed while writing an archive.
    #[error("Archive write failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No service with the given id exists in the store.
    #[error("Service with ID {0} not found")]
    ServiceNotFound(u64),

    /// A service definition failed schema validation.
    #[error("Invalid service data: '{field}' {reason}")]
    InvalidServiceConfig { field: &'static str, reason: String },

    /// Batch generation was requested with an empty store.
    #[error("No services to generate")]
    NoServices,

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidServiceConfig { field, reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers and the CLI exit path.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidServiceConfig { .. }
            | AppError::NoServices
            | AppError::ParseError { .. }
            | AppError::Json(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ServiceNotFound(_) => io::ErrorKind::NotFound,
            AppError::Archive(_) => io::ErrorKind::Other,
        }
    }
}
