//! Configuration validation command handler.

use anyhow::Result;

use workcache::config::validation::ConfigValidator;
use workcache::config::Config;

/// Handle `workcache validate`.
///
/// Prints the full diagnostic summary and exits non-zero when the
/// configuration is invalid, so the command can gate scripted runs.
pub(crate) fn cmd_validate(config: &Config) -> Result<()> {
    let summary = ConfigValidator::summary(config);

    println!("Backend: {}", summary.backend);
    println!("Valid:   {}", summary.valid);

    if !summary.errors.is_empty() {
        println!("\nErrors:");
        for error in &summary.errors {
            println!("  - {}", error);
        }
    }

    if !summary.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &summary.warnings {
            println!("  - {}", warning);
        }
    }

    if summary.valid {
        Ok(())
    } else {
        anyhow::bail!("configuration is invalid")
    }
}
