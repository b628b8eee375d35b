//! workcache — disk-persisted TTL result cache for LLM-driven workflow runs.
//!
//! Workflows are identified by a `(department, backend, params)` triple;
//! results are cached on disk, one human-inspectable JSON file per entry,
//! keyed by the SHA-256 digest of the canonical identity. Multiple
//! processes may share one cache directory: entry writes are atomic
//! (temp-file-then-rename) and reads tolerate entries disappearing.
//!
//! - [`cache`] — key derivation and the [`WorkflowCache`] itself
//! - [`config`] — typed YAML configuration and its semantic validator
//! - [`workflow`] — the executor seam the cache sits in front of
//! - [`error`] — crate-wide error taxonomy

pub mod cache;
pub mod config;
pub mod error;
pub mod workflow;

pub use cache::{CacheEntry, CacheStats, Ttl, WorkflowCache};
pub use config::{BackendKind, CacheSettings, Config};
pub use error::{Result, WorkcacheError};
pub use workflow::{CachedExecutor, WorkflowExecutor, WorkflowOutcome, WorkflowRequest};
