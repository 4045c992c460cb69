//! Collector config loader (strict parsing) and environment settings.

pub mod schema;

use std::fs;
use std::sync::Arc;

use pulse_core::error::{PulseError, Result};

pub use schema::{CollectorConfig, PublishSection};

pub fn load_from_file(path: &str) -> Result<CollectorConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PulseError::InvalidConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CollectorConfig> {
    let cfg: CollectorConfig = serde_yaml::from_str(s)
        .map_err(|e| PulseError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Environment variable lookup, injectable so tests can substitute a map for
/// the process environment.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Lookup backed by the process environment.
pub fn process_env() -> EnvLookup {
    Arc::new(|key: &str| std::env::var(key).ok())
}

/// Required per-invocation settings provided by the scheduler environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub project: String,
    pub environment: String,
}

impl Settings {
    /// Resolve PROJECT_NAME and ENVIRONMENT. A missing key fails before any
    /// metric is gathered, naming the key.
    pub fn resolve(env: &EnvLookup) -> Result<Self> {
        let project = require(env, "PROJECT_NAME")?;
        let environment = require(env, "ENVIRONMENT")?;
        Ok(Self {
            project,
            environment,
        })
    }
}

fn require(env: &EnvLookup, key: &str) -> Result<String> {
    match env(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PulseError::MissingConfig(key.to_string())),
    }
}
