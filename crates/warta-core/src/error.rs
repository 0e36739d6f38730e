//! Error types for Warta Core
//!
//! Every failure is local to the call that produced it: nothing is retried and
//! nothing is fatal. Corrupt stored payloads are the one exception to
//! propagation, the collection reader downgrades them to "empty" and logs.

use thiserror::Error;

/// Result type alias for Warta operations
pub type Result<T> = std::result::Result<T, WartaError>;

/// Main error type for Warta operations
#[derive(Error, Debug)]
pub enum WartaError {
    /// A draft is missing required fields
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Mutation targeted an id that is not in the user-authored collection
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Stored payload could not be decoded
    #[error("Corrupt value under key '{key}': {reason}")]
    StorageCorrupt { key: String, reason: String },

    /// Backend failure outside of SQLite (poisoned state, missing database, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite errors
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        source: Box<WartaError>,
    },
}

/// Required draft fields that were left empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|f| *f == field)
    }
}

impl WartaError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True for `NotFound`, looking through any context wrappers
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// True for `Validation`, looking through any context wrappers
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::WithContext { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<WartaError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().context(f()))
    }
}
