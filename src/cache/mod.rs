//! Workflow result caching with TTL expiry and per-entry JSON persistence.

pub mod key;
pub mod workflow_cache;

pub use key::{cache_key, canonicalize};
pub use workflow_cache::{CacheEntry, CacheStats, Ttl, WorkflowCache};
