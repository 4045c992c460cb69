//! Batch partitioning for the publish step.
//!
//! The ingest backend caps each publish call at a fixed number of entries.
//! The ceiling is a parameter (config-owned), not a constant: backends differ
//! and the limit may change without a code edit.

use crate::metric::MetricSample;

/// Split an ordered sample slice into contiguous chunks of at most `ceiling`
/// entries. Chunks partition the input: every sample appears in exactly one
/// chunk, in original order.
///
/// `ceiling` must be non-zero; callers get it from validated config.
pub fn partition(samples: &[MetricSample], ceiling: usize) -> Vec<&[MetricSample]> {
    if samples.is_empty() || ceiling == 0 {
        return Vec::new();
    }
    samples.chunks(ceiling).collect()
}
