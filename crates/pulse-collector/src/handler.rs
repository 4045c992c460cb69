//! Invocation entrypoint.
//!
//! Two-state machine: RUNNING resolves to SUCCESS or FAILURE, nothing else.
//! Every error is caught at this boundary and turned into a report; nothing
//! propagates uncaught to the scheduler.

use chrono::Utc;
use tracing::Instrument;

use pulse_core::error::Result;
use pulse_core::metric::DimensionSet;
use pulse_core::namespace::namespace;
use pulse_core::report::InvocationReport;

use crate::config::Settings;
use crate::gather::gather;
use crate::publish::publish;
use crate::state::CollectorState;

/// Opaque scheduler context. Only the request id is used, for log
/// correlation.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
}

/// Run one collection: resolve settings, gather, publish, report.
///
/// The event payload is accepted for interface compatibility with the
/// scheduler and ignored.
pub async fn handle(
    state: &CollectorState,
    _event: serde_json::Value,
    ctx: InvocationContext,
) -> InvocationReport {
    let span = tracing::info_span!(
        "invocation",
        request_id = ctx.request_id.as_deref().unwrap_or("-")
    );

    async {
        match run(state).await {
            Ok(names) => {
                tracing::info!(count = names.len(), "metrics published");
                InvocationReport::success(&names)
            }
            Err(e) => {
                tracing::error!(kind = e.kind().as_str(), error = %e, "collection failed");
                InvocationReport::failure(&e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn run(state: &CollectorState) -> Result<Vec<String>> {
    // Settings resolve first: a missing key fails before any metric is read.
    let settings = Settings::resolve(state.env())?;
    tracing::info!(
        project = %settings.project,
        environment = %settings.environment,
        "starting metrics collection"
    );

    let samples = gather(state.sources(), Utc::now()).await?;

    let ns = namespace(&state.cfg().publish.namespace_prefix, &settings.environment);
    let dims = DimensionSet::for_invocation(&settings.environment, &settings.project);

    publish(
        state.backend(),
        &ns,
        &samples,
        &dims,
        state.cfg().publish.max_batch_size,
    )
    .await?;

    Ok(samples.into_iter().map(|s| s.name).collect())
}
