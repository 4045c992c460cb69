//! Metric source seam and the ordered source registry.

pub mod builtin;

use std::sync::Arc;

use async_trait::async_trait;

use pulse_core::error::Result;
use pulse_core::metric::Unit;

pub use builtin::StubSource;

/// One independent metric accessor: a single number, may fail, no partial
/// result. A production deployment replaces the stub behind this trait with
/// a real data-store query.
#[async_trait]
pub trait MetricSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn unit(&self) -> Unit;
    async fn sample(&self) -> Result<f64>;
}

/// Ordered registry of metric sources. Gathering order follows registration
/// order, and that order is preserved all the way into the publish batches.
#[derive(Default)]
pub struct SourceSet {
    sources: Vec<Arc<dyn MetricSource>>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, src: Arc<dyn MetricSource>) {
        self.sources.push(src);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MetricSource>> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn registered_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// The six core business metrics.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for src in builtin::core_metrics() {
            set.register(src);
        }
        set
    }

    /// Core metrics plus the caregiver, client, billing, and compliance
    /// groups. Large enough to span multiple publish batches.
    pub fn extended() -> Self {
        let mut set = Self::builtin();
        for src in builtin::extended_metrics() {
            set.register(src);
        }
        set
    }
}
