mod client;
pub mod fsm;
mod notifier;
mod pipeline;
mod spawner;
mod types;

pub use client::{InferenceClient, WorkflowClient};
pub use fsm::{RelayEvent, RelayState, RelayStateMachine};
pub use notifier::{Notifier, SUBJECT, SmtpNotifier, render_body};
pub use pipeline::{DEFAULT_USER, FailurePolicy, Relay};
pub use spawner::{BoxTask, TaskHandle, TaskSpawner, TokioSpawner};
pub use types::{
    BirthQuery, InferenceResult, ResponseMode, WorkflowRequest, WorkflowResponse, WorkflowRunData,
};
