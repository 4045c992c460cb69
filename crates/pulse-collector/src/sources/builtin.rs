//! Built-in metric source tables.
//!
//! Each entry is a stub returning a fixed value; production swaps the stub
//! for a real query against the application data store. Adding a metric is
//! one table entry, not new branching logic.

use std::sync::Arc;

use async_trait::async_trait;

use pulse_core::error::Result;
use pulse_core::metric::Unit;

use super::MetricSource;

/// Table-driven stub source: fixed name, unit, and value.
pub struct StubSource {
    name: &'static str,
    unit: Unit,
    value: f64,
}

impl StubSource {
    pub fn new(name: &'static str, unit: Unit, value: f64) -> Self {
        Self { name, unit, value }
    }
}

#[async_trait]
impl MetricSource for StubSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    async fn sample(&self) -> Result<f64> {
        Ok(self.value)
    }
}

/// The six core business metrics, in publish order.
pub fn core_metrics() -> Vec<Arc<dyn MetricSource>> {
    table(&[
        ("ActiveUsers", Unit::Count, 45.0),
        ("ActiveShifts", Unit::Count, 23.0),
        ("EVVComplianceRate", Unit::Percent, 98.5),
        ("ClaimProcessingRate", Unit::CountPerSecond, 2.3),
        ("ScheduleUtilizationRate", Unit::Percent, 87.2),
        ("HIPAAAuditEvents", Unit::Count, 12.0),
    ])
}

/// Caregiver, client, billing, and compliance metric groups.
pub fn extended_metrics() -> Vec<Arc<dyn MetricSource>> {
    table(&[
        // caregivers
        ("TotalCaregivers", Unit::Count, 156.0),
        ("ActiveCaregivers", Unit::Count, 142.0),
        ("CaregiverUtilizationRate", Unit::Percent, 91.0),
        ("AverageCaregiverRating", Unit::Count, 4.7),
        // clients
        ("TotalClients", Unit::Count, 89.0),
        ("ActiveClients", Unit::Count, 78.0),
        ("ClientSatisfactionRate", Unit::Percent, 96.5),
        ("NewClientOnboardingRate", Unit::CountPerSecond, 3.2),
        // billing
        ("PendingClaims", Unit::Count, 45.0),
        ("DeniedClaims", Unit::Count, 7.0),
        ("ClaimApprovalRate", Unit::Percent, 94.2),
        ("AverageDaysToPayment", Unit::Count, 18.0),
        ("MonthlyRevenue", Unit::Count, 245_000.0),
        // compliance
        ("PolicyViolations", Unit::Count, 2.0),
        ("TrainingCompletionRate", Unit::Percent, 98.8),
        ("CredentialExpiryWarnings", Unit::Count, 5.0),
        ("HipaaRiskScore", Unit::Percent, 95.5),
    ])
}

fn table(rows: &[(&'static str, Unit, f64)]) -> Vec<Arc<dyn MetricSource>> {
    rows.iter()
        .map(|&(name, unit, value)| Arc::new(StubSource::new(name, unit, value)) as Arc<dyn MetricSource>)
        .collect()
}
