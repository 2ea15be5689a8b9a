use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub mail: MailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub mode: ServerMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerMode {
    Debug,
    #[default]
    Release,
    Test,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub dify_api_key: String,
    /// Identifier sent as `user` in every workflow request.
    #[serde(default = "default_api_user")]
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    #[serde(default)]
    pub sender_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
    // Rotation settings are accepted but not acted on.
    #[serde(default)]
    pub max_size: u32,
    #[serde(default)]
    pub max_backups: u32,
    #[serde(default)]
    pub max_age: u32,
}

/// Declared for parity with deployments; nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: f64,
}

/// Timeouts in seconds. Only `api_request` is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_timeout_secs")]
    pub api_request: u64,
    #[serde(default = "default_timeout_secs")]
    pub email_send: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: ServerMode::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            max_size: 0,
            max_backups: 0,
            max_age: 0,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            api_request: default_timeout_secs(),
            email_send: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_user() -> String {
    crate::relay::DEFAULT_USER.to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_requests_per_second() -> f64 {
    10.0
}

fn default_timeout_secs() -> u64 {
    30
}
