//! Pulse collector binary.
//!
//! One-shot scheduled task:
//! - optional `pulse.yaml` tuning file (strict parsing + validate)
//! - PROJECT_NAME / ENVIRONMENT from the environment
//! - gather the built-in metric set, publish in batches, report, exit

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use pulse_collector::handler::{handle, InvocationContext};
use pulse_collector::publish::HttpBackend;
use pulse_collector::state::CollectorState;
use pulse_collector::config;

const CONFIG_PATH: &str = "pulse.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = if Path::new(CONFIG_PATH).exists() {
        config::load_from_file(CONFIG_PATH).expect("config load failed")
    } else {
        config::CollectorConfig::default()
    };

    let backend = HttpBackend::new(
        cfg.publish.endpoint.clone(),
        Duration::from_millis(cfg.publish.request_timeout_ms),
    )
    .expect("http backend build failed");

    let state = CollectorState::new(cfg, Arc::new(backend));

    let report = handle(&state, serde_json::Value::Null, InvocationContext::default()).await;
    println!("{}", report.body);

    std::process::exit(if report.is_success() { 0 } else { 1 });
}
