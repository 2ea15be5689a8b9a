use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Workflow API responded with status {status}: {body}")]
    Protocol { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn smtp(msg: impl Into<String>) -> Self {
        Self::Smtp(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Which leg of the relay produced this error, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::Protocol { .. } | Self::Decode(_) => "workflow_api",
            Self::Smtp(_) => "email",
            Self::Config(_) | Self::Yaml(_) => "config",
            _ => "internal",
        }
    }
}
