//! Error types for the workshop library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Department;

/// Comprehensive error type for all workshop operations.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Order is missing fields required before a state transition
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Another worker already holds the order
    #[error("Order {order_id} is already taken by {holder}")]
    Conflict { order_id: u64, holder: String },

    /// Order already reached the terminal status
    #[error("Order {order_id} is already completed")]
    TerminalState { order_id: u64 },

    /// Order not found for the given ID
    #[error("Order with ID {id} not found")]
    OrderNotFound { id: u64 },

    /// Operation requires a claim that does not exist
    #[error("Order {order_id} has not been claimed")]
    NotAssigned { order_id: u64 },

    /// Worker's station does not match the order's queue
    #[error("Order {order_id} belongs to {actual}, not {expected}")]
    WrongDepartment {
        order_id: u64,
        expected: Department,
        actual: String,
    },

    /// The stored collection changed since it was read
    #[error("Order collection changed underneath (expected revision {expected}, found {found})")]
    StaleCollection { expected: u64, found: u64 },

    /// Every write attempt lost to a concurrent writer
    #[error("Gave up after {attempts} write attempts against a busy order collection")]
    WriteContention { attempts: u32 },

    /// Database connection or query errors
    #[error("Database error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ShopError {
        ShopError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ShopError {
        ShopError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ShopError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Whether the error is a lost race that a fresh read-modify-write may
    /// resolve.
    pub fn is_stale(&self) -> bool {
        matches!(self, ShopError::StaleCollection { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ShopError::storage(message).with_source(e))
    }
}

/// Result type alias for workshop operations
pub type Result<T> = std::result::Result<T, ShopError>;
