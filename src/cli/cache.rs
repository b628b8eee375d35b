//! Cache statistics and invalidation command handlers.

use anyhow::{Context, Result};

use workcache::cache::WorkflowCache;
use workcache::config::Config;

/// Handle `workcache stats`.
pub(crate) fn cmd_stats(config: &Config) -> Result<()> {
    let cache = open_cache(config)?;
    let stats = cache.stats();

    println!("Workflow cache");
    println!("  Directory:       {}", stats.cache_dir.display());
    println!("  Enabled:         {}", stats.enabled);
    println!("  Default TTL:     {}", stats.ttl);
    println!("  Total entries:   {}", stats.total_entries);
    println!("  Valid entries:   {}", stats.valid_entries);
    println!("  Expired entries: {}", stats.expired_entries);
    Ok(())
}

/// Handle `workcache invalidate [--department ..] [--backend ..]`.
pub(crate) fn cmd_invalidate(
    config: &Config,
    department: Option<&str>,
    backend: Option<&str>,
) -> Result<()> {
    let cache = open_cache(config)?;
    let removed = cache
        .invalidate(department, backend)
        .context("Failed to invalidate cache entries")?;

    match (department, backend) {
        (None, None) => println!("Removed {} cache entries.", removed),
        (dept, be) => {
            let mut filters = Vec::new();
            if let Some(d) = dept {
                filters.push(format!("department={}", d));
            }
            if let Some(b) = be {
                filters.push(format!("backend={}", b));
            }
            println!(
                "Removed {} cache entries matching {}.",
                removed,
                filters.join(", ")
            );
        }
    }
    Ok(())
}

/// Handle `workcache clear`.
pub(crate) fn cmd_clear(config: &Config) -> Result<()> {
    let cache = open_cache(config)?;
    let removed = cache.clear_all().context("Failed to clear cache")?;
    println!("Removed {} cache entries.", removed);
    Ok(())
}

fn open_cache(config: &Config) -> Result<WorkflowCache> {
    WorkflowCache::new(&config.cache).context("Failed to open workflow cache")
}
