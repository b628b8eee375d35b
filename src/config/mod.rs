//! Typed configuration loaded from YAML with environment overrides.
//!
//! Shape and type errors are rejected here, at deserialization time, so a
//! misconfigured TTL or a non-boolean `enabled` flag fails fast instead of
//! surfacing as confusing behavior later. Semantic checks the type system
//! cannot express live in [`validation`].

pub mod validation;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkcacheError};

/// Environment variable overriding the configured backend.
pub const ENV_BACKEND: &str = "WORKCACHE_BACKEND";
/// Environment variable overriding the config file location.
pub const ENV_CONFIG_PATH: &str = "WORKCACHE_CONFIG_PATH";

// ============================================================================
// BackendKind
// ============================================================================

/// The orchestration backends a workflow can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Sequential multi-agent framework.
    Crewai,
    /// Parallel subagent framework.
    ClaudeCode,
}

impl BackendKind {
    /// All known backends, in declaration order.
    pub const ALL: [BackendKind; 2] = [BackendKind::Crewai, BackendKind::ClaudeCode];

    /// The identifier used in config files and cache entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Crewai => "crewai",
            BackendKind::ClaudeCode => "claude_code",
        }
    }

    /// Environment variables the backend requires at runtime.
    pub fn required_env_vars(&self) -> &'static [&'static str] {
        match self {
            BackendKind::Crewai => &["OPENAI_API_KEY"],
            // ANTHROPIC_API_KEY is optional for claude_code.
            BackendKind::ClaudeCode => &[],
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = WorkcacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "crewai" => Ok(BackendKind::Crewai),
            "claude_code" => Ok(BackendKind::ClaudeCode),
            other => Err(WorkcacheError::Config(format!(
                "Invalid backend: '{}'. Must be one of: {}",
                other,
                BackendKind::ALL.map(|b| b.as_str()).join(", ")
            ))),
        }
    }
}

// ============================================================================
// Config sections
// ============================================================================

/// Per-tier iteration limits for the sequential backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxIterations {
    pub executive: u32,
    pub head: u32,
    pub specialist: u32,
}

impl Default for MaxIterations {
    fn default() -> Self {
        Self {
            executive: 5,
            head: 5,
            specialist: 3,
        }
    }
}

/// Settings for the sequential multi-agent backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewaiConfig {
    pub verbose: bool,
    pub max_iterations: MaxIterations,
}

impl Default for CrewaiConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            max_iterations: MaxIterations::default(),
        }
    }
}

/// Settings for the parallel subagent backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaudeCodeConfig {
    pub subagents_dir: String,
    pub model: String,
    pub parallel_execution: bool,
    pub max_parallel_tasks: usize,
}

impl Default for ClaudeCodeConfig {
    fn default() -> Self {
        Self {
            subagents_dir: ".claude/agents".to_string(),
            model: "sonnet".to_string(),
            parallel_execution: true,
            max_parallel_tasks: 5,
        }
    }
}

/// Company identity and department roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub departments: Vec<String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "AI Company Inc.".to_string(),
            departments: validation::VALID_DEPARTMENTS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

/// The three cache options consumed by the workflow cache at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// When false, every cache operation is a no-op.
    pub enabled: bool,
    /// Root directory for persisted entries; created if missing.
    pub cache_dir: String,
    /// Default time-to-live in seconds; 0 means entries never expire.
    pub ttl_seconds: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_dir: ".cache/workflows".to_string(),
            ttl_seconds: 3600,
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Top-level configuration.
///
/// `backend` stays a free string here so an unknown backend is reported by
/// the validator with a proper message instead of a serde parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: String,
    pub crewai: Option<CrewaiConfig>,
    pub claude_code: Option<ClaudeCodeConfig>,
    pub company: CompanyConfig,
    pub cache: CacheSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Crewai.as_str().to_string(),
            crewai: Some(CrewaiConfig::default()),
            claude_code: Some(ClaudeCodeConfig::default()),
            company: CompanyConfig::default(),
            cache: CacheSettings::default(),
        }
    }
}

impl Config {
    /// Directory holding workcache state (`~/.workcache`).
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".workcache")
    }

    /// Config file location: `WORKCACHE_CONFIG_PATH` or `~/.workcache/config.yaml`.
    pub fn path() -> PathBuf {
        std::env::var(ENV_CONFIG_PATH)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::dir().join("config.yaml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist. `WORKCACHE_BACKEND` overrides the
    /// configured backend either way.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                WorkcacheError::Config(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            serde_yaml::from_str(&raw).map_err(|e| {
                WorkcacheError::Config(format!("Invalid YAML in {}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        if let Ok(backend) = std::env::var(ENV_BACKEND) {
            if !backend.trim().is_empty() {
                config.backend = backend;
            }
        }

        Ok(config)
    }

    /// The configured backend, parsed.
    pub fn backend_kind(&self) -> Result<BackendKind> {
        self.backend.parse()
    }
}
