use serde::{Deserialize, Serialize};

/// Inbound birth-information query. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthQuery {
    pub birth_time: String,
    pub birth_place: String,
    pub contact: String,
    pub way: String,
    pub gender: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Blocking,
}

/// Request body for the workflow API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub inputs: BirthQuery,
    pub response_mode: ResponseMode,
    pub user: String,
}

impl WorkflowRequest {
    pub fn blocking(inputs: BirthQuery, user: impl Into<String>) -> Self {
        Self {
            inputs,
            response_mode: ResponseMode::Blocking,
            user: user.into(),
        }
    }
}

/// Response envelope of a blocking workflow run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub workflow_run_id: String,
    #[serde(default)]
    pub task_id: String,
    pub data: WorkflowRunData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowRunData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub workflow_id: String,
    #[serde(default)]
    pub status: String,
    pub outputs: InferenceResult,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub elapsed_time: f64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub total_steps: u64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub finished_at: i64,
}

/// The part of a workflow run that ends up in the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub message: String,
    #[serde(default)]
    pub contact: String,
}
