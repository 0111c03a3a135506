//! Error types for dbml_builder

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dbml_builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dbml_builder
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Schema parse error: {0}")]
    SchemaParseError(String),

    #[error("Schema {} has no project note holding a version", .0.display())]
    MissingVersion(PathBuf),

    #[error("Code generation error: {0}")]
    CodegenError(String),

    #[error("Python error: {0}")]
    PythonError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// Map an IO error on `path` to `NotFound` when the file is missing
    pub(crate) fn from_io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(path.into())
        } else {
            Error::IoError(error)
        }
    }
}

/// Convert Serde JSON errors to dbml_builder errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to dbml_builder errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}

/// Convert regex compilation errors to dbml_builder errors
impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Error::ConfigError(format!("Invalid patch pattern: {}", error))
    }
}
