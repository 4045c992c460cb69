//! Invocation report returned to the scheduler.

use serde_json::json;

use crate::error::PulseError;

/// Outcome of one invocation. Constructed once, returned to the caller,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationReport {
    pub status_code: u16,
    pub body: String,
}

impl InvocationReport {
    /// Success report: every gathered metric was published.
    pub fn success(metric_names: &[String]) -> Self {
        let body = json!({
            "message": format!("Successfully collected {} metrics", metric_names.len()),
            "metrics": metric_names,
        });
        Self {
            status_code: 200,
            body: body.to_string(),
        }
    }

    /// Failure report: the triggering error's text, verbatim.
    pub fn failure(err: &PulseError) -> Self {
        let body = json!({ "error": err.to_string() });
        Self {
            status_code: 500,
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
