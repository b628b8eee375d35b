//! Error types for workcache.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WorkcacheError>;

/// Errors surfaced by the cache, configuration, and workflow layers.
///
/// Read-path failures on individual cache entries are deliberately NOT
/// represented here: a corrupt or expired entry degrades to a cache miss
/// so workflow execution can always proceed. Only write-path and
/// directory-level failures become errors, because those break the
/// durability contract the caller relies on.
#[derive(Debug, Error)]
pub enum WorkcacheError {
    /// Cache directory unwritable, permission denied, or disk I/O failure
    /// on a write path.
    #[error("Storage error at {path}: {source}")]
    Storage {
        /// Path of the file or directory the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A result payload could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration detected at load or construction time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Semantic validation of a loaded configuration failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Workflow execution failed in the backing executor.
    #[error("Workflow execution error: {0}")]
    Execution(String),
}
