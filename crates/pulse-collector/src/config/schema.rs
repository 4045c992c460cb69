use serde::Deserialize;
use pulse_core::error::{PulseError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub publish: PublishSection,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            publish: PublishSection::default(),
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PulseError::InvalidConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.publish.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishSection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,

    /// Backend entries-per-call ceiling. The reference backend caps at 20;
    /// other backends differ, so this is config rather than a constant.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for PublishSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            namespace_prefix: default_namespace_prefix(),
            max_batch_size: default_max_batch_size(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl PublishSection {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(PulseError::InvalidConfig(
                "publish.endpoint must not be empty".into(),
            ));
        }
        if self.namespace_prefix.is_empty() {
            return Err(PulseError::InvalidConfig(
                "publish.namespace_prefix must not be empty".into(),
            ));
        }
        if !(1..=500).contains(&self.max_batch_size) {
            return Err(PulseError::InvalidConfig(
                "publish.max_batch_size must be between 1 and 500".into(),
            ));
        }
        if !(100..=120_000).contains(&self.request_timeout_ms) {
            return Err(PulseError::InvalidConfig(
                "publish.request_timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_endpoint() -> String {
    "http://127.0.0.1:9060/v1/ingest".into()
}
fn default_namespace_prefix() -> String {
    "SerenityERP".into()
}
fn default_max_batch_size() -> usize {
    20
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
