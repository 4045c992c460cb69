//! HTTP ingest backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use pulse_core::error::{PulseError, Result};

use super::{MetricDatum, MetricsBackend};

#[derive(Serialize)]
struct PutMetricDataRequest<'a> {
    namespace: &'a str,
    metric_data: &'a [MetricDatum],
}

/// Backend that POSTs each batch as JSON to the configured ingest endpoint.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: String, request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| PulseError::Backend(format!("http client build failed: {e}")))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl MetricsBackend for HttpBackend {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricDatum]) -> Result<()> {
        let req = PutMetricDataRequest {
            namespace,
            metric_data: data,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&req)
            .send()
            .await
            .map_err(|e| PulseError::Backend(format!("ingest request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(PulseError::Backend(format!(
                "ingest rejected batch: status={status} body={text}"
            )));
        }
        Ok(())
    }
}
