//! Shared collector state: config, sources, backend, env lookup.
//!
//! Built once at process start, read-only afterwards. A long-lived host can
//! reuse one state across invocations; a one-shot host builds it per run.
//! Tests substitute the backend and the env lookup.

use std::sync::Arc;

use crate::config::{CollectorConfig, EnvLookup};
use crate::publish::MetricsBackend;
use crate::sources::SourceSet;

#[derive(Clone)]
pub struct CollectorState {
    inner: Arc<CollectorStateInner>,
}

struct CollectorStateInner {
    cfg: CollectorConfig,
    sources: SourceSet,
    backend: Arc<dyn MetricsBackend>,
    env: EnvLookup,
}

impl CollectorState {
    /// Build state with the built-in source set and the process environment.
    pub fn new(cfg: CollectorConfig, backend: Arc<dyn MetricsBackend>) -> Self {
        Self::with_parts(cfg, SourceSet::builtin(), backend, crate::config::process_env())
    }

    /// Full-injection constructor for tests and embedding hosts.
    pub fn with_parts(
        cfg: CollectorConfig,
        sources: SourceSet,
        backend: Arc<dyn MetricsBackend>,
        env: EnvLookup,
    ) -> Self {
        Self {
            inner: Arc::new(CollectorStateInner {
                cfg,
                sources,
                backend,
                env,
            }),
        }
    }

    pub fn cfg(&self) -> &CollectorConfig {
        &self.inner.cfg
    }

    pub fn sources(&self) -> &SourceSet {
        &self.inner.sources
    }

    pub fn backend(&self) -> &dyn MetricsBackend {
        self.inner.backend.as_ref()
    }

    pub fn env(&self) -> &EnvLookup {
        &self.inner.env
    }
}
