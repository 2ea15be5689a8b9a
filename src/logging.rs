use crate::{Error, Result, config::LoggingConfig};
use std::{
    env,
    fs::OpenOptions,
    path::PathBuf,
    sync::Mutex,
};
use tracing::{Dispatch, warn};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// A JSON tracing subscriber built from [`LoggingConfig`].
///
/// Construction has no global side effects. The binary calls [`Logger::install`]
/// once at startup; tests can scope it with `tracing::dispatcher::with_default`.
pub struct Logger {
    dispatch: Dispatch,
    sink: LogSink,
    fallback_reason: Option<String>,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Result<Self> {
        // Environment variable overrides config
        let directives = env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
        let filter = EnvFilter::try_new(&directives).map_err(|e| {
            Error::config(format!("Invalid log filter '{}': {}", directives, e))
        })?;

        let mut fallback_reason = None;
        let (writer, sink) = match config.file.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => (
                    BoxMakeWriter::new(Mutex::new(file)),
                    LogSink::File(PathBuf::from(path)),
                ),
                Err(e) => {
                    fallback_reason = Some(format!("cannot open log file {}: {}", path, e));
                    (BoxMakeWriter::new(std::io::stderr), LogSink::Stderr)
                }
            },
            None => (BoxMakeWriter::new(std::io::stderr), LogSink::Stderr),
        };

        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .finish();

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            sink,
            fallback_reason,
        })
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Installs the subscriber as the process-wide default. Call once.
    pub fn install(self) -> Result<LogSink> {
        tracing::dispatcher::set_global_default(self.dispatch)
            .map_err(|e| Error::internal(format!("failed to install logger: {}", e)))?;

        if let Some(reason) = self.fallback_reason {
            warn!("{}, logging to standard error", reason);
        }

        Ok(self.sink)
    }
}
