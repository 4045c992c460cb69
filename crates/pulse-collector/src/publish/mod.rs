//! Batch publisher: partition gathered samples and submit them sequentially.

pub mod http;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use pulse_core::batch::partition;
use pulse_core::error::{PulseError, Result};
use pulse_core::metric::{Dimension, DimensionSet, MetricSample, Unit};

pub use http::HttpBackend;

/// One wire entry in a publish call.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDatum {
    pub name: String,
    pub value: f64,
    pub unit: Unit,
    pub timestamp: DateTime<Utc>,
    pub dimensions: Vec<Dimension>,
}

impl MetricDatum {
    /// Build a wire entry from a sample plus the invocation dimension set.
    /// Every datum in a run carries the identical dimensions.
    pub fn from_sample(sample: &MetricSample, dims: &DimensionSet) -> Self {
        Self {
            name: sample.name.clone(),
            value: sample.value,
            unit: sample.unit,
            timestamp: sample.timestamp,
            dimensions: dims.entries().to_vec(),
        }
    }
}

/// Outbound metrics ingest seam. One call per batch; each call is atomic on
/// the backend side.
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricDatum]) -> Result<()>;
}

/// Partition samples at the configured ceiling and submit each batch in
/// order, awaiting each call before issuing the next.
///
/// The first failed submit aborts the run; batches already accepted stay
/// published (there is no rollback or idempotent retry here). The returned
/// error carries the failing batch index for diagnostics.
pub async fn publish(
    backend: &dyn MetricsBackend,
    namespace: &str,
    samples: &[MetricSample],
    dims: &DimensionSet,
    max_batch_size: usize,
) -> Result<usize> {
    let mut sent = 0usize;
    for (idx, batch) in partition(samples, max_batch_size).into_iter().enumerate() {
        let data: Vec<MetricDatum> = batch
            .iter()
            .map(|s| MetricDatum::from_sample(s, dims))
            .collect();

        backend
            .put_metric_data(namespace, &data)
            .await
            .map_err(|e| PulseError::Publish {
                batch: idx,
                message: e.to_string(),
            })?;

        sent += data.len();
        tracing::debug!(batch = idx, size = data.len(), %namespace, "batch submitted");
    }
    Ok(sent)
}
