use super::{
    client::{InferenceClient, WorkflowClient},
    fsm::{RelayEvent, RelayState, RelayStateMachine},
    notifier::{Notifier, SmtpNotifier},
    spawner::{TaskHandle, TaskSpawner, TokioSpawner},
    types::{BirthQuery, WorkflowRequest},
};
use crate::{Error, Result, config::Config};
use std::{sync::Arc, time::Duration};
use tracing::{error, info};

/// Default `user` identifier sent with every workflow request.
pub const DEFAULT_USER: &str = "yacoservice";

/// What happens to a failure once the caller has already been answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log at error level and stop. No retry, no dead-letter.
    #[default]
    LogAndDrop,
}

impl FailurePolicy {
    pub fn handle(&self, contact: &str, error: &Error) {
        match self {
            Self::LogAndDrop => {
                error!(
                    stage = error.stage(),
                    contact = %contact,
                    "Relay failed, dropping request: {}",
                    error
                );
            }
        }
    }
}

/// Calls the workflow API for a query and mails the outcome to its contact.
pub struct Relay {
    client: Arc<dyn InferenceClient>,
    notifier: Arc<dyn Notifier>,
    spawner: Arc<dyn TaskSpawner>,
    user: String,
    policy: FailurePolicy,
}

impl Relay {
    pub fn new(
        client: Arc<dyn InferenceClient>,
        notifier: Arc<dyn Notifier>,
        spawner: Arc<dyn TaskSpawner>,
    ) -> Self {
        Self {
            client,
            notifier,
            spawner,
            user: DEFAULT_USER.to_string(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = WorkflowClient::new(
            &config.api,
            Duration::from_secs(config.timeouts.api_request),
        )?;
        let notifier = SmtpNotifier::new(config.mail.clone());

        info!("Relay initialized");

        Ok(Self::new(Arc::new(client), Arc::new(notifier), Arc::new(TokioSpawner))
            .with_user(config.api.user.clone()))
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Schedules the relay for `query` in the background and returns at once.
    pub fn submit(self: &Arc<Self>, query: BirthQuery) -> TaskHandle {
        let relay = Arc::clone(self);
        self.spawner.spawn(
            "relay",
            Box::pin(async move {
                match relay.process(query).await {
                    Ok(state) => info!(?state, "Relay finished"),
                    Err(e) => error!("Relay aborted: {}", e),
                }
            }),
        )
    }

    /// Runs the whole relay inline and reports where it stopped.
    ///
    /// External failures are handed to the [`FailurePolicy`] and show up as
    /// `ApiFailed` or `EmailFailed`; `Err` is reserved for internal faults.
    pub async fn process(&self, query: BirthQuery) -> Result<RelayState> {
        // A typed `BirthQuery` has already passed deserialization.
        let mut fsm = RelayStateMachine::new();
        fsm.transition(RelayEvent::Validate)?;

        let contact = query.contact.clone();
        let request = WorkflowRequest::blocking(query, self.user.clone());

        info!(
            birth_place = %request.inputs.birth_place,
            way = %request.inputs.way,
            contact = %contact,
            "Sending request to workflow API"
        );
        fsm.transition(RelayEvent::Dispatch)?;

        let result = match self.client.call(&request).await {
            Ok(result) => {
                fsm.transition(RelayEvent::ApiSucceeded)?;
                result
            }
            Err(e) => {
                self.policy.handle(&contact, &e);
                return fsm.transition(RelayEvent::ApiFailed);
            }
        };

        info!(email = %contact, "Sending email");

        match self.notifier.send(&contact, &result).await {
            Ok(()) => fsm.transition(RelayEvent::EmailSent),
            Err(e) => {
                self.policy.handle(&contact, &e);
                fsm.transition(RelayEvent::EmailFailed)
            }
        }
    }
}
