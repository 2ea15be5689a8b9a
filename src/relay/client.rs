use super::types::{InferenceResult, WorkflowRequest, WorkflowResponse};
use crate::{Error, Result, config::ApiConfig};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn call(&self, request: &WorkflowRequest) -> Result<InferenceResult>;
}

/// Blocking-mode client for the workflow run endpoint.
pub struct WorkflowClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WorkflowClient {
    pub fn new(config: &ApiConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.dify_api_key.clone(),
        })
    }
}

#[async_trait]
impl InferenceClient for WorkflowClient {
    async fn call(&self, request: &WorkflowRequest) -> Result<InferenceResult> {
        let body = serde_json::to_vec(request)?;

        debug!(endpoint = %self.endpoint, "Sending request to workflow API");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(format!("Failed to send workflow request: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("Failed to read workflow response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Protocol {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let envelope: WorkflowResponse = serde_json::from_slice(&bytes)
            .map_err(|e| Error::decode(format!("Failed to parse workflow response: {}", e)))?;

        if let Some(error) = envelope.data.error.as_deref() {
            warn!(
                workflow_run_id = %envelope.workflow_run_id,
                status = %envelope.data.status,
                "Workflow run reported an error: {}",
                error
            );
        } else if !envelope.data.status.is_empty() && envelope.data.status != "succeeded" {
            warn!(
                workflow_run_id = %envelope.workflow_run_id,
                "Workflow run finished with status {}",
                envelope.data.status
            );
        }

        debug!(
            workflow_run_id = %envelope.workflow_run_id,
            elapsed_time = envelope.data.elapsed_time,
            total_tokens = envelope.data.total_tokens,
            "Received workflow response"
        );

        Ok(envelope.data.outputs)
    }
}
