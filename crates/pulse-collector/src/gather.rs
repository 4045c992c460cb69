//! Gather step: invoke every source in order, all-or-nothing.

use chrono::{DateTime, Utc};

use pulse_core::error::{PulseError, Result};
use pulse_core::metric::MetricSample;

use crate::sources::SourceSet;

/// Sample every registered source in registration order, stamping each sample
/// with the invocation capture time.
///
/// The first source failure aborts the whole gather: no partial metric set is
/// ever handed to the publisher, and there is no per-metric retry or skip.
pub async fn gather(sources: &SourceSet, now: DateTime<Utc>) -> Result<Vec<MetricSample>> {
    let mut samples = Vec::with_capacity(sources.len());
    for src in sources.iter() {
        let value = src.sample().await.map_err(|e| PulseError::Source {
            metric: src.name().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(metric = src.name(), value, "gathered");
        samples.push(MetricSample::new(src.name(), value, src.unit(), now));
    }
    Ok(samples)
}
