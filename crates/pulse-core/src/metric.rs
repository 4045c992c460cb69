//! Metric sample, unit, and dimension types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Measurement unit accepted by the ingest backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Count,
    Percent,
    #[serde(rename = "Count/Second")]
    CountPerSecond,
}

impl Unit {
    /// Wire string used in the publish payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Count => "Count",
            Unit::Percent => "Percent",
            Unit::CountPerSecond => "Count/Second",
        }
    }
}

/// One named numeric observation. Immutable once constructed; one is produced
/// per source per invocation.
#[derive(Debug, Clone)]
pub struct MetricSample {
    pub name: String,
    pub value: f64,
    pub unit: Unit,
    pub timestamp: DateTime<Utc>,
}

impl MetricSample {
    pub fn new(name: impl Into<String>, value: f64, unit: Unit, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value,
            unit,
            timestamp,
        }
    }
}

/// A key/value label attached to every sample in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

/// Ordered dimension labels shared by every sample in one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionSet(Vec<Dimension>);

impl DimensionSet {
    /// The fixed invocation dimension set: Environment first, Project second.
    pub fn for_invocation(environment: &str, project: &str) -> Self {
        Self(vec![
            Dimension {
                name: "Environment".into(),
                value: environment.into(),
            },
            Dimension {
                name: "Project".into(),
                value: project.into(),
            },
        ])
    }

    pub fn entries(&self) -> &[Dimension] {
        &self.0
    }
}
