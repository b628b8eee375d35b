//! Semantic validation for loaded configuration.
//!
//! Deserialization already rejects shape and type errors; this validator
//! covers what the type system cannot: backend identity and section
//! presence, required environment variables, and cache/company settings.
//! Execution is gated on [`ConfigValidator::validate`] succeeding.

use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::config::{BackendKind, Config};
use crate::error::{Result, WorkcacheError};

/// Departments recognized by the organizational model.
pub const VALID_DEPARTMENTS: [&str; 6] = [
    "executive",
    "marketing",
    "operations",
    "human_resources",
    "software_development",
    "commercial",
];

/// TTLs above this (24 hours) draw a staleness warning.
const TTL_WARN_THRESHOLD_SECS: u64 = 86_400;

/// Non-throwing diagnostic view over a configuration.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    /// Whether the configuration passed all checks.
    pub valid: bool,
    /// The configured backend identifier, as written.
    pub backend: String,
    /// Validation failures, empty when valid.
    pub errors: Vec<String>,
    /// Non-fatal findings worth surfacing to an operator.
    pub warnings: Vec<String>,
}

/// Validates configuration before any workflow is executed.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration: backend, cache, then company.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_backend(config)?;
        Self::validate_cache(config)?;
        Self::validate_company(config)?;
        info!("Configuration validation successful");
        Ok(())
    }

    /// Check that the required environment variables for a backend are
    /// present; with `None`, checks every known backend.
    pub fn validate_environment(backend: Option<BackendKind>) -> Result<()> {
        let backends: Vec<BackendKind> = match backend {
            Some(b) => vec![b],
            None => BackendKind::ALL.to_vec(),
        };

        let mut errors = Vec::new();
        for backend in backends {
            let missing = missing_env_vars(backend);
            if !missing.is_empty() {
                errors.push(format!(
                    "Backend '{}' missing: {}",
                    backend,
                    missing.join(", ")
                ));
            }
        }

        if errors.is_empty() {
            debug!("Environment validation successful");
            Ok(())
        } else {
            Err(WorkcacheError::Config(format!(
                "Environment validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }

    /// Run every check and collect the outcome instead of failing, for
    /// diagnostic commands.
    pub fn summary(config: &Config) -> ValidationSummary {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = Self::validate(config) {
            errors.push(e.to_string());
        }

        if config.cache.enabled && config.cache.ttl_seconds > TTL_WARN_THRESHOLD_SECS {
            warnings.push(
                "Cache TTL is very large (>24 hours), may lead to stale results".to_string(),
            );
        }

        if config.backend == BackendKind::ClaudeCode.as_str()
            && env_var_missing("ANTHROPIC_API_KEY")
        {
            warnings.push(
                "ANTHROPIC_API_KEY not set - claude_code backend may have limited functionality"
                    .to_string(),
            );
        }

        ValidationSummary {
            valid: errors.is_empty(),
            backend: config.backend.clone(),
            errors,
            warnings,
        }
    }

    // ========================================================================
    // Section checks
    // ========================================================================

    fn validate_backend(config: &Config) -> Result<()> {
        let backend = BackendKind::from_str(&config.backend)?;

        let missing = missing_env_vars(backend);
        if !missing.is_empty() {
            return Err(WorkcacheError::Config(format!(
                "Backend '{}' requires the following environment variables:\n  - {}\n\
                 Please set them in your .env file or environment.",
                backend,
                missing.join("\n  - ")
            )));
        }

        let section_present = match backend {
            BackendKind::Crewai => config.crewai.is_some(),
            BackendKind::ClaudeCode => config.claude_code.is_some(),
        };
        if !section_present {
            return Err(WorkcacheError::Config(format!(
                "Missing configuration section for backend '{}'",
                backend
            )));
        }

        if backend == BackendKind::ClaudeCode {
            let mut errors = Vec::new();
            if let Some(cc) = &config.claude_code {
                if cc.subagents_dir.trim().is_empty() {
                    errors.push("claude_code.subagents_dir cannot be empty");
                }
                if cc.model.trim().is_empty() {
                    errors.push("claude_code.model cannot be empty");
                }
            }
            if !errors.is_empty() {
                return Err(WorkcacheError::Config(format!(
                    "Invalid backend configuration:\n  - {}",
                    errors.join("\n  - ")
                )));
            }
        }

        debug!(backend = %backend, "Backend validation successful");
        Ok(())
    }

    fn validate_cache(config: &Config) -> Result<()> {
        let cache = &config.cache;

        if cache.cache_dir.trim().is_empty() {
            return Err(WorkcacheError::Validation(
                "Invalid cache configuration:\n  - cache.cache_dir cannot be empty".to_string(),
            ));
        }

        if cache.ttl_seconds > TTL_WARN_THRESHOLD_SECS {
            warn!(
                ttl_seconds = cache.ttl_seconds,
                "cache.ttl_seconds is very large; consider a smaller value to avoid stale cache"
            );
        }

        debug!("Cache configuration validation successful");
        Ok(())
    }

    fn validate_company(config: &Config) -> Result<()> {
        let company = &config.company;
        let mut errors = Vec::new();

        if company.name.trim().is_empty() {
            errors.push("company.name cannot be empty".to_string());
        }

        if company.departments.is_empty() {
            errors.push("company.departments cannot be empty".to_string());
        } else {
            for dept in &company.departments {
                if !VALID_DEPARTMENTS.contains(&dept.as_str()) {
                    errors.push(format!(
                        "Invalid department '{}'. Valid: {}",
                        dept,
                        VALID_DEPARTMENTS.join(", ")
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(WorkcacheError::Validation(format!(
                "Invalid company configuration:\n  - {}",
                errors.join("\n  - ")
            )));
        }

        debug!("Company configuration validation successful");
        Ok(())
    }
}

fn missing_env_vars(backend: BackendKind) -> Vec<&'static str> {
    backend
        .required_env_vars()
        .iter()
        .filter(|var| env_var_missing(var))
        .copied()
        .collect()
}

fn env_var_missing(var: &str) -> bool {
    std::env::var(var).map_or(true, |v| v.trim().is_empty())
}
