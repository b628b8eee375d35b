//! Disk-persisted TTL cache for workflow results.
//!
//! One JSON file per entry under the configured cache directory, named by
//! the SHA-256 key of the workflow identity. Entries are written with a
//! temp-file-then-rename so a concurrent reader never observes a
//! half-written entry; independent processes sharing one directory
//! coordinate through the filesystem alone.
//!
//! Expiry is enforced lazily: `get` deletes an expired entry as a side
//! effect of discovering it, while `stats` only classifies entries and
//! never deletes. The two read paths intentionally disagree on side
//! effects.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::CacheSettings;
use crate::error::{Result, WorkcacheError};

use super::key::{cache_key, canonicalize};

// ============================================================================
// Ttl
// ============================================================================

/// Entry lifetime.
///
/// `NoExpiry` is the explicit spelling of the `ttl_seconds = 0`
/// configuration value, so "never expires" cannot be misread as "expires
/// immediately".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// The entry never expires.
    NoExpiry,
    /// The entry expires once its age exceeds this many seconds.
    After(u64),
}

impl Ttl {
    /// Map the numeric configuration surface onto the named variants.
    pub fn from_seconds(secs: u64) -> Self {
        if secs == 0 {
            Ttl::NoExpiry
        } else {
            Ttl::After(secs)
        }
    }

    /// Inverse of [`Ttl::from_seconds`], for the persisted entry format.
    pub fn as_seconds(self) -> u64 {
        match self {
            Ttl::NoExpiry => 0,
            Ttl::After(secs) => secs,
        }
    }
}

impl std::fmt::Display for Ttl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ttl::NoExpiry => write!(f, "no expiry"),
            Ttl::After(secs) => write!(f, "{}s", secs),
        }
    }
}

// ============================================================================
// CacheEntry
// ============================================================================

/// One persisted cache unit, stored as human-inspectable JSON.
///
/// `department`, `backend`, and `params` are kept alongside the result so
/// invalidation can match on them and operators can see what produced an
/// entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Department the workflow ran for.
    pub department: String,
    /// Orchestration backend that produced the result.
    pub backend: String,
    /// Workflow parameters, in canonical (recursively key-sorted) form.
    pub params: Value,
    /// The cached workflow result, opaque to the cache.
    pub result: Value,
    /// Unix timestamp when the entry was created.
    pub created_at: u64,
    /// Entry lifetime in seconds; 0 means the entry never expires.
    pub ttl_seconds: u64,
}

impl CacheEntry {
    /// An entry is expired once its age strictly exceeds its TTL.
    pub fn is_expired(&self, now: u64) -> bool {
        match Ttl::from_seconds(self.ttl_seconds) {
            Ttl::NoExpiry => false,
            Ttl::After(ttl) => now.saturating_sub(self.created_at) > ttl,
        }
    }
}

// ============================================================================
// CacheStats
// ============================================================================

/// Snapshot of cache state, produced by a non-destructive scan.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Whether caching is enabled.
    pub enabled: bool,
    /// Number of persisted entries, valid or not.
    pub total_entries: usize,
    /// Entries that would be served by `get`.
    pub valid_entries: usize,
    /// Entries past their TTL (or unreadable) that `get` would discard.
    pub expired_entries: usize,
    /// Default TTL applied to new entries.
    pub ttl: Ttl,
    /// Directory holding the persisted entries.
    pub cache_dir: PathBuf,
}

// ============================================================================
// WorkflowCache
// ============================================================================

/// Cache for workflow results, keyed by `(department, backend, params)`.
///
/// The cache is an optimization, never a correctness dependency: every
/// read-path failure on an individual entry degrades to a miss so the
/// caller can recompute. Write-path failures are surfaced, because a
/// silently dropped `set` would let the caller assume a result was cached
/// when it was not.
pub struct WorkflowCache {
    cache_dir: PathBuf,
    ttl: Ttl,
    enabled: bool,
}

impl WorkflowCache {
    /// Open a cache over the configured directory, creating it if missing.
    ///
    /// Fails fast with a configuration error on an empty `cache_dir` and
    /// with a storage error when the directory cannot be created.
    pub fn new(settings: &CacheSettings) -> Result<Self> {
        if settings.cache_dir.trim().is_empty() {
            return Err(WorkcacheError::Config(
                "cache.cache_dir cannot be empty".to_string(),
            ));
        }

        let cache_dir = PathBuf::from(&settings.cache_dir);
        let ttl = Ttl::from_seconds(settings.ttl_seconds);

        if settings.enabled {
            fs::create_dir_all(&cache_dir).map_err(|e| WorkcacheError::Storage {
                path: cache_dir.clone(),
                source: e,
            })?;
            info!(dir = %cache_dir.display(), ttl = %ttl, "Workflow cache initialized");
        } else {
            info!("Workflow cache disabled");
        }

        Ok(Self {
            cache_dir,
            ttl,
            enabled: settings.enabled,
        })
    }

    /// Look up a cached result. Returns `None` when disabled, absent,
    /// expired, or unreadable.
    ///
    /// An expired entry is deleted as a side effect before the miss is
    /// reported; a corrupt entry is likewise deleted so it cannot block
    /// future lookups. This never calls the executor and never errors:
    /// the caller can always proceed by recomputing.
    pub fn get(&self, department: &str, backend: &str, params: &Map<String, Value>) -> Option<Value> {
        if !self.enabled {
            return None;
        }

        let key = match cache_key(department, backend, params) {
            Ok(key) => key,
            Err(e) => {
                warn!(department, backend, error = %e, "Failed to derive cache key");
                return None;
            }
        };
        let path = self.entry_path(&key);

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key = %&key[..8.min(key.len())], error = %e, "Failed to read cache entry");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&data) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key = %&key[..8.min(key.len())], error = %e, "Corrupt cache entry, removing");
                let _ = fs::remove_file(&path);
                return None;
            }
        };

        if entry.is_expired(now_secs()) {
            debug!(key = %&key[..8.min(key.len())], "Cache entry expired, removing");
            let _ = fs::remove_file(&path);
            return None;
        }

        info!(department, key = %&key[..8.min(key.len())], "Cache hit");
        Some(entry.result)
    }

    /// Store a workflow result, replacing any prior entry at the same key.
    ///
    /// The entry is written to a temporary file in the cache directory and
    /// renamed into place, so a concurrent `get` sees either the old entry
    /// or the new one, never a partial write. No-op when disabled.
    pub fn set(
        &self,
        department: &str,
        backend: &str,
        params: &Map<String, Value>,
        result: &Value,
        ttl_override: Option<Ttl>,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let key = cache_key(department, backend, params)?;
        let entry = CacheEntry {
            department: department.to_string(),
            backend: backend.to_string(),
            params: canonicalize(&Value::Object(params.clone())),
            result: result.clone(),
            created_at: now_secs(),
            ttl_seconds: ttl_override.unwrap_or(self.ttl).as_seconds(),
        };

        self.write_entry(&key, &entry)?;
        info!(department, key = %&key[..8.min(key.len())], "Cache stored");
        Ok(())
    }

    /// Delete every entry matching the given filters; an omitted filter
    /// matches everything. Returns the number of entries removed.
    ///
    /// Corrupt entries are deleted and counted. Entries disappearing
    /// mid-scan (another process invalidating concurrently) are tolerated;
    /// the count may only undercount, never fail.
    pub fn invalidate(&self, department: Option<&str>, backend: Option<&str>) -> Result<usize> {
        if !self.enabled {
            return Ok(0);
        }

        let mut removed = 0;
        for path in self.entry_paths()? {
            let data = match fs::read_to_string(&path) {
                Ok(data) => data,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read cache entry during invalidation");
                    continue;
                }
            };

            let matches = match serde_json::from_str::<CacheEntry>(&data) {
                Ok(entry) => {
                    department.is_none_or(|d| entry.department == d)
                        && backend.is_none_or(|b| entry.backend == b)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt cache entry, removing");
                    true
                }
            };

            if matches && fs::remove_file(&path).is_ok() {
                debug!(path = %path.display(), "Invalidated cache entry");
                removed += 1;
            }
        }

        info!(removed, "Invalidated cache entries");
        Ok(removed)
    }

    /// Remove every persisted entry unconditionally.
    pub fn clear_all(&self) -> Result<usize> {
        self.invalidate(None, None)
    }

    /// Classify every persisted entry as valid or expired, using the same
    /// expiry rule as `get` but without deleting anything.
    ///
    /// Stats is a diagnostic view and must not have side effects; unreadable
    /// entries are counted as expired.
    pub fn stats(&self) -> CacheStats {
        if !self.enabled {
            return CacheStats {
                enabled: false,
                total_entries: 0,
                valid_entries: 0,
                expired_entries: 0,
                ttl: self.ttl,
                cache_dir: self.cache_dir.clone(),
            };
        }

        let now = now_secs();
        let mut total = 0;
        let mut valid = 0;
        let mut expired = 0;

        for path in self.entry_paths().unwrap_or_default() {
            let entry = fs::read_to_string(&path)
                .ok()
                .and_then(|data| serde_json::from_str::<CacheEntry>(&data).ok());
            total += 1;
            match entry {
                Some(entry) if !entry.is_expired(now) => valid += 1,
                _ => expired += 1,
            }
        }

        CacheStats {
            enabled: true,
            total_entries: total,
            valid_entries: valid,
            expired_entries: expired,
            ttl: self.ttl,
            cache_dir: self.cache_dir.clone(),
        }
    }

    /// Directory this cache persists entries under.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.json"))
    }

    fn entry_paths(&self) -> Result<Vec<PathBuf>> {
        let dir = match fs::read_dir(&self.cache_dir) {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(WorkcacheError::Storage {
                    path: self.cache_dir.clone(),
                    source: e,
                })
            }
        };

        Ok(dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect())
    }

    fn write_entry(&self, key: &str, entry: &CacheEntry) -> Result<()> {
        let json = serde_json::to_vec_pretty(entry)?;
        let path = self.entry_path(key);

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.cache_dir).map_err(|e| WorkcacheError::Storage {
                path: self.cache_dir.clone(),
                source: e,
            })?;
        tmp.write_all(&json).map_err(|e| WorkcacheError::Storage {
            path: tmp.path().to_path_buf(),
            source: e,
        })?;
        tmp.persist(&path).map_err(|e| WorkcacheError::Storage {
            path,
            source: e.error,
        })?;
        Ok(())
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn settings(dir: &Path) -> CacheSettings {
        CacheSettings {
            enabled: true,
            cache_dir: dir.to_string_lossy().into_owned(),
            ttl_seconds: 3600,
        }
    }

    fn cache_in(dir: &Path) -> WorkflowCache {
        WorkflowCache::new(&settings(dir)).unwrap()
    }

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test params must be an object")
    }

    /// Rewrite `created_at` on every persisted entry, simulating the
    /// passage of time without sleeping.
    fn backdate_entries(dir: &Path, by_secs: u64) {
        for file in std::fs::read_dir(dir).unwrap() {
            let path = file.unwrap().path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let mut entry: Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            let created = entry["created_at"].as_u64().unwrap();
            entry["created_at"] = json!(created - by_secs);
            std::fs::write(&path, serde_json::to_string_pretty(&entry).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        assert!(cache
            .get("marketing", "crewai", &params(json!({"q": "Q3"})))
            .is_none());
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"campaign_goal": "launch"}));
        let result = json!({"status": "ok", "output": "plan A", "steps": [1, 2, 3]});

        cache.set("marketing", "crewai", &p, &result, None).unwrap();
        assert_eq!(cache.get("marketing", "crewai", &p), Some(result));
    }

    #[test]
    fn test_round_trip_survives_params_reordering() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());

        let mut write_params = Map::new();
        write_params.insert("budget".into(), json!(10));
        write_params.insert("audience".into(), json!("smb"));

        let mut read_params = Map::new();
        read_params.insert("audience".into(), json!("smb"));
        read_params.insert("budget".into(), json!(10));

        let result = json!({"status": "ok"});
        cache
            .set("marketing", "crewai", &write_params, &result, None)
            .unwrap();
        assert_eq!(cache.get("marketing", "crewai", &read_params), Some(result));
    }

    #[test]
    fn test_overwrite_keeps_one_entry_with_latest_result() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"campaign_goal": "launch"}));

        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok", "output": "plan A"}), None)
            .unwrap();
        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok", "output": "plan B"}), None)
            .unwrap();

        assert_eq!(
            cache.get("marketing", "crewai", &p),
            Some(json!({"status": "ok", "output": "plan B"}))
        );
        assert_eq!(cache.stats().total_entries, 1);
    }

    #[test]
    fn test_expiry_removes_entry_on_get() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"q": "Q3"}));

        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok"}), Some(Ttl::After(1)))
            .unwrap();
        backdate_entries(tmp.path(), 2);

        assert!(cache.get("marketing", "crewai", &p).is_none());
        // Expire-on-read deleted the stale file.
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_entry_valid_at_exact_ttl_boundary() {
        let entry = CacheEntry {
            department: "marketing".into(),
            backend: "crewai".into(),
            params: json!({}),
            result: json!({}),
            created_at: 1000,
            ttl_seconds: 60,
        };
        assert!(!entry.is_expired(1060), "age == ttl is still valid");
        assert!(entry.is_expired(1061));
    }

    #[test]
    fn test_ttl_zero_never_expires() {
        let tmp = TempDir::new().unwrap();
        let cache = WorkflowCache::new(&CacheSettings {
            enabled: true,
            cache_dir: tmp.path().to_string_lossy().into_owned(),
            ttl_seconds: 0,
        })
        .unwrap();
        let p = params(json!({"q": "Q3"}));

        cache.set("marketing", "crewai", &p, &json!({"status": "ok"}), None).unwrap();
        backdate_entries(tmp.path(), 1_000_000);

        assert!(cache.get("marketing", "crewai", &p).is_some());
    }

    #[test]
    fn test_ttl_override_pins_single_entry() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"q": "Q3"}));

        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok"}), Some(Ttl::NoExpiry))
            .unwrap();
        backdate_entries(tmp.path(), 1_000_000);

        assert!(cache.get("marketing", "crewai", &p).is_some());
    }

    #[test]
    fn test_stats_classifies_without_deleting() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());

        cache
            .set("marketing", "crewai", &params(json!({"n": 1})), &json!({}), Some(Ttl::After(1)))
            .unwrap();
        cache
            .set("operations", "crewai", &params(json!({"n": 2})), &json!({}), None)
            .unwrap();
        backdate_entries(tmp.path(), 2);

        let stats = cache.stats();
        assert!(stats.enabled);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.valid_entries, 1);
        assert_eq!(stats.expired_entries, 1);

        // Stats is non-destructive: the expired file is still on disk.
        let stats_again = cache.stats();
        assert_eq!(stats_again.total_entries, 2);
    }

    #[test]
    fn test_disabled_cache_is_a_full_noop() {
        let tmp = TempDir::new().unwrap();
        let cache = WorkflowCache::new(&CacheSettings {
            enabled: false,
            cache_dir: tmp.path().join("never-created").to_string_lossy().into_owned(),
            ttl_seconds: 3600,
        })
        .unwrap();
        let p = params(json!({"q": "Q3"}));

        cache.set("marketing", "crewai", &p, &json!({"status": "ok"}), None).unwrap();
        assert!(cache.get("marketing", "crewai", &p).is_none());
        assert_eq!(cache.invalidate(None, None).unwrap(), 0);
        assert_eq!(cache.clear_all().unwrap(), 0);

        let stats = cache.stats();
        assert!(!stats.enabled);
        assert_eq!(stats.total_entries, 0);
        assert!(!tmp.path().join("never-created").exists());
    }

    #[test]
    fn test_invalidate_by_department() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        seed_invalidation_entries(&cache);

        let removed = cache.invalidate(Some("marketing"), None).unwrap();
        assert_eq!(removed, 2);

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 1);
        assert!(cache
            .get("operations", "crewai", &params(json!({"n": 3})))
            .is_some());
    }

    #[test]
    fn test_invalidate_by_backend() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        seed_invalidation_entries(&cache);

        let removed = cache.invalidate(None, Some("crewai")).unwrap();
        assert_eq!(removed, 2);
        assert!(cache
            .get("marketing", "claude_code", &params(json!({"n": 2})))
            .is_some());
    }

    #[test]
    fn test_invalidate_by_department_and_backend() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        seed_invalidation_entries(&cache);

        let removed = cache.invalidate(Some("marketing"), Some("crewai")).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(cache.stats().total_entries, 2);
    }

    #[test]
    fn test_invalidate_without_filters_clears_everything() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        seed_invalidation_entries(&cache);

        assert_eq!(cache.invalidate(None, None).unwrap(), 3);
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_clear_all() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        seed_invalidation_entries(&cache);

        assert_eq!(cache.clear_all().unwrap(), 3);
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_corrupt_entry_self_heals_on_get() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"q": "Q3"}));

        cache.set("marketing", "crewai", &p, &json!({"status": "ok"}), None).unwrap();
        let entry_file = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .find(|p| p.extension().is_some_and(|ext| ext == "json"))
            .unwrap();
        std::fs::write(&entry_file, "not json {{").unwrap();

        assert!(cache.get("marketing", "crewai", &p).is_none());
        assert!(!entry_file.exists(), "corrupt entry must be removed");
    }

    #[test]
    fn test_invalidate_removes_and_counts_corrupt_entries() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        std::fs::write(tmp.path().join("deadbeef.json"), "not json").unwrap();

        assert_eq!(cache.invalidate(Some("marketing"), None).unwrap(), 1);
        assert!(!tmp.path().join("deadbeef.json").exists());
    }

    #[test]
    fn test_stats_counts_corrupt_as_expired() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        std::fs::write(tmp.path().join("deadbeef.json"), "not json").unwrap();

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.expired_entries, 1);
        // Non-destructive even for corrupt entries.
        assert!(tmp.path().join("deadbeef.json").exists());
    }

    #[test]
    fn test_non_entry_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        std::fs::write(tmp.path().join("README"), "not an entry").unwrap();

        assert_eq!(cache.stats().total_entries, 0);
        assert_eq!(cache.clear_all().unwrap(), 0);
        assert!(tmp.path().join("README").exists());
    }

    #[test]
    fn test_empty_cache_dir_rejected_at_construction() {
        let result = WorkflowCache::new(&CacheSettings {
            enabled: true,
            cache_dir: "  ".into(),
            ttl_seconds: 3600,
        });
        assert!(matches!(result, Err(WorkcacheError::Config(_))));
    }

    #[test]
    fn test_set_surfaces_storage_error_on_unwritable_dir() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        // Remove the directory out from under the cache.
        std::fs::remove_dir_all(tmp.path()).unwrap();

        let result = cache.set(
            "marketing",
            "crewai",
            &params(json!({"q": "Q3"})),
            &json!({"status": "ok"}),
            None,
        );
        assert!(matches!(result, Err(WorkcacheError::Storage { .. })));
    }

    #[test]
    fn test_two_instances_share_one_directory() {
        let tmp = TempDir::new().unwrap();
        let writer = cache_in(tmp.path());
        let reader = cache_in(tmp.path());
        let p = params(json!({"q": "Q3"}));

        writer.set("marketing", "crewai", &p, &json!({"status": "ok"}), None).unwrap();
        assert!(reader.get("marketing", "crewai", &p).is_some());

        assert_eq!(reader.clear_all().unwrap(), 1);
        assert!(writer.get("marketing", "crewai", &p).is_none());
    }

    #[test]
    fn test_concrete_scenario_plan_b_wins() {
        let tmp = TempDir::new().unwrap();
        let cache = cache_in(tmp.path());
        let p = params(json!({"campaign_goal": "launch"}));

        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok", "output": "plan A"}), None)
            .unwrap();
        cache
            .set("marketing", "crewai", &p, &json!({"status": "ok", "output": "plan B"}), None)
            .unwrap();

        assert_eq!(
            cache.get("marketing", "crewai", &p),
            Some(json!({"status": "ok", "output": "plan B"}))
        );
        assert_eq!(cache.stats().total_entries, 1);
    }

    fn seed_invalidation_entries(cache: &WorkflowCache) {
        cache
            .set("marketing", "crewai", &params(json!({"n": 1})), &json!({"r": 1}), None)
            .unwrap();
        cache
            .set("marketing", "claude_code", &params(json!({"n": 2})), &json!({"r": 2}), None)
            .unwrap();
        cache
            .set("operations", "crewai", &params(json!({"n": 3})), &json!({"r": 3}), None)
            .unwrap();
    }
}
