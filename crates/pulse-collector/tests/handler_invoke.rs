//! End-to-end invocation tests against a spy backend.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pulse_collector::config::{CollectorConfig, EnvLookup};
use pulse_collector::handler::{handle, InvocationContext};
use pulse_collector::publish::{MetricDatum, MetricsBackend};
use pulse_collector::sources::{MetricSource, SourceSet, StubSource};
use pulse_collector::state::CollectorState;
use pulse_core::error::{PulseError, Result};
use pulse_core::metric::Unit;

/// Records every put_metric_data call; optionally fails from a given call
/// index onward.
#[derive(Default)]
struct SpyBackend {
    calls: Mutex<Vec<(String, Vec<MetricDatum>)>>,
    fail_from: Option<usize>,
}

impl SpyBackend {
    fn failing_from(idx: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_from: Some(idx),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<MetricDatum>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetricsBackend for SpyBackend {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricDatum]) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        if let Some(n) = self.fail_from {
            if calls.len() >= n {
                return Err(PulseError::Backend("ingest unavailable".into()));
            }
        }
        calls.push((namespace.to_string(), data.to_vec()));
        Ok(())
    }
}

struct FailingSource;

#[async_trait]
impl MetricSource for FailingSource {
    fn name(&self) -> &'static str {
        "ActiveShifts"
    }
    fn unit(&self) -> Unit {
        Unit::Count
    }
    async fn sample(&self) -> Result<f64> {
        Err(PulseError::Backend("shift store unreachable".into()))
    }
}

fn env_of(pairs: &[(&str, &str)]) -> EnvLookup {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(move |key: &str| map.get(key).cloned())
}

fn full_env() -> EnvLookup {
    env_of(&[("PROJECT_NAME", "serenity"), ("ENVIRONMENT", "production")])
}

fn state_with(sources: SourceSet, backend: Arc<SpyBackend>, env: EnvLookup) -> CollectorState {
    CollectorState::with_parts(CollectorConfig::default(), sources, backend, env)
}

async fn invoke(state: &CollectorState) -> pulse_core::report::InvocationReport {
    handle(state, serde_json::Value::Null, InvocationContext::default()).await
}

#[tokio::test]
async fn builtin_run_publishes_six_metrics_in_one_batch() {
    let spy = Arc::new(SpyBackend::default());
    let state = state_with(SourceSet::builtin(), Arc::clone(&spy), full_env());

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 200);

    let body: serde_json::Value = serde_json::from_str(&report.body).unwrap();
    assert_eq!(body["message"], "Successfully collected 6 metrics");
    let names: Vec<&str> = body["metrics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "ActiveUsers",
            "ActiveShifts",
            "EVVComplianceRate",
            "ClaimProcessingRate",
            "ScheduleUtilizationRate",
            "HIPAAAuditEvents",
        ]
    );

    // ceil(6/20) = 1 outbound call
    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.len(), 6);
}

#[tokio::test]
async fn namespace_is_prefix_plus_title_cased_environment() {
    let spy = Arc::new(SpyBackend::default());
    let state = state_with(SourceSet::builtin(), Arc::clone(&spy), full_env());

    invoke(&state).await;

    let calls = spy.calls();
    assert_eq!(calls[0].0, "SerenityERP/Production");
}

#[tokio::test]
async fn every_datum_carries_the_identical_dimension_set() {
    let spy = Arc::new(SpyBackend::default());
    let state = state_with(SourceSet::builtin(), Arc::clone(&spy), full_env());

    invoke(&state).await;

    for (_, data) in spy.calls() {
        for datum in data {
            assert_eq!(datum.dimensions.len(), 2);
            assert_eq!(datum.dimensions[0].name, "Environment");
            assert_eq!(datum.dimensions[0].value, "production");
            assert_eq!(datum.dimensions[1].name, "Project");
            assert_eq!(datum.dimensions[1].value, "serenity");
        }
    }
}

#[tokio::test]
async fn failing_source_aborts_before_any_publish() {
    let mut sources = SourceSet::new();
    sources.register(Arc::new(StubSource::new("ActiveUsers", Unit::Count, 45.0)));
    sources.register(Arc::new(FailingSource));
    sources.register(Arc::new(StubSource::new(
        "EVVComplianceRate",
        Unit::Percent,
        98.5,
    )));

    let spy = Arc::new(SpyBackend::default());
    let state = state_with(sources, Arc::clone(&spy), full_env());

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 500);

    let body: serde_json::Value = serde_json::from_str(&report.body).unwrap();
    let text = body["error"].as_str().unwrap();
    assert!(text.contains("ActiveShifts"));
    assert!(text.contains("shift store unreachable"));

    // all-or-nothing: zero outbound calls
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn extended_set_spans_two_batches() {
    let spy = Arc::new(SpyBackend::default());
    let sources = SourceSet::extended();
    assert_eq!(sources.len(), 23);
    let state = state_with(sources, Arc::clone(&spy), full_env());

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 200);

    let sizes: Vec<usize> = spy.calls().iter().map(|(_, d)| d.len()).collect();
    assert_eq!(sizes, vec![20, 3]);
}

#[tokio::test]
async fn missing_project_name_fails_with_zero_calls() {
    let spy = Arc::new(SpyBackend::default());
    let state = state_with(
        SourceSet::builtin(),
        Arc::clone(&spy),
        env_of(&[("ENVIRONMENT", "production")]),
    );

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 500);

    let body: serde_json::Value = serde_json::from_str(&report.body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("PROJECT_NAME"));
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn missing_environment_fails_with_zero_calls() {
    let spy = Arc::new(SpyBackend::default());
    let state = state_with(
        SourceSet::builtin(),
        Arc::clone(&spy),
        env_of(&[("PROJECT_NAME", "serenity")]),
    );

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 500);
    assert!(report.body.contains("ENVIRONMENT"));
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn backend_failure_mid_run_keeps_earlier_batches() {
    // First call accepted, second rejected.
    let spy = Arc::new(SpyBackend::failing_from(1));
    let state = state_with(SourceSet::extended(), Arc::clone(&spy), full_env());

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 500);

    let body: serde_json::Value = serde_json::from_str(&report.body).unwrap();
    let text = body["error"].as_str().unwrap();
    assert!(text.contains("batch 1"));
    assert!(text.contains("ingest unavailable"));

    // the accepted batch stays submitted, no rollback
    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.len(), 20);
}

#[tokio::test]
async fn configured_ceiling_changes_batch_split() {
    let mut cfg = CollectorConfig::default();
    cfg.publish.max_batch_size = 4;

    let spy = Arc::new(SpyBackend::default());
    let state = CollectorState::with_parts(cfg, SourceSet::builtin(), spy.clone(), full_env());

    let report = invoke(&state).await;
    assert_eq!(report.status_code, 200);

    let sizes: Vec<usize> = spy.calls().iter().map(|(_, d)| d.len()).collect();
    assert_eq!(sizes, vec![4, 2]);
}
