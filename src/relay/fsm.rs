use crate::{Error, Result};
use tracing::{debug, warn};

// Relay states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Received,
    Validated,
    Dispatched,
    ApiSucceeded,
    ApiFailed,
    EmailSent,
    EmailFailed,
}

// Relay events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayEvent {
    Validate,
    Dispatch,
    ApiSucceeded,
    ApiFailed,
    EmailSent,
    EmailFailed,
}

/// Tracks one relay operation from receipt to its terminal state.
#[derive(Debug)]
pub struct RelayStateMachine {
    state: RelayState,
}

impl Default for RelayStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayStateMachine {
    pub fn new() -> Self {
        Self {
            state: RelayState::Received,
        }
    }

    pub fn current_state(&self) -> RelayState {
        self.state
    }

    pub fn transition(&mut self, event: RelayEvent) -> Result<RelayState> {
        let new_state = match (self.state, event) {
            (RelayState::Received, RelayEvent::Validate) => RelayState::Validated,
            (RelayState::Validated, RelayEvent::Dispatch) => RelayState::Dispatched,
            (RelayState::Dispatched, RelayEvent::ApiSucceeded) => RelayState::ApiSucceeded,
            (RelayState::Dispatched, RelayEvent::ApiFailed) => RelayState::ApiFailed,
            (RelayState::ApiSucceeded, RelayEvent::EmailSent) => RelayState::EmailSent,
            (RelayState::ApiSucceeded, RelayEvent::EmailFailed) => RelayState::EmailFailed,
            _ => {
                warn!(
                    "Invalid relay transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!(
            "Relay state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );

        self.state = new_state;
        Ok(new_state)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            RelayState::ApiFailed | RelayState::EmailSent | RelayState::EmailFailed
        )
    }
}
