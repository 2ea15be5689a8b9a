use birth_relay::{
    Result,
    config::{
        ApiConfig, Config, LoggingConfig, MailConfig, RateLimitConfig, ServerConfig, ServerMode,
        TimeoutConfig,
    },
    relay::BirthQuery,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            mode: ServerMode::Test,
        },
        api: ApiConfig {
            endpoint: endpoint.to_string(),
            dify_api_key: "test-api-key".to_string(),
            user: "yacoservice".to_string(),
        },
        mail: MailConfig {
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 465,
            smtp_username: "noreply@example.com".to_string(),
            smtp_password: "secret".to_string(),
            sender_name: "Relay".to_string(),
        },
        logging: LoggingConfig::default(),
        rate_limit: RateLimitConfig::default(),
        timeouts: TimeoutConfig::default(),
    }
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// The query from the service's documented example
pub fn sample_query_json() -> Value {
    json!({
        "birthTime": "1990-01-01T00:00",
        "birthPlace": "Beijing",
        "contact": "a@b.com",
        "way": "email",
        "gender": "female"
    })
}

pub fn sample_query() -> BirthQuery {
    serde_json::from_value(sample_query_json()).unwrap()
}

/// A successful blocking workflow run
pub fn workflow_success_body(message: &str) -> Value {
    json!({
        "workflow_run_id": "djflajgkldjgd",
        "task_id": "9da23599-e713-473b-982c-4328d4f5c78a",
        "data": {
            "id": "fdlsjfjejkghjda",
            "workflow_id": "fldjaslkfjlsda",
            "status": "succeeded",
            "outputs": {
                "message": message,
                "contact": "a@b.com"
            },
            "error": null,
            "elapsed_time": 3.3,
            "total_tokens": 689,
            "total_steps": 3,
            "created_at": 1705407629,
            "finished_at": 1727807631
        }
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  mode: debug

api:
  endpoint: "https://api.dify.ai/v1/workflows/run"
  dify_api_key: "app-test-key"

mail:
  smtp_server: "smtp.qq.com"
  smtp_port: 465
  smtp_username: "noreply@example.com"
  smtp_password: "secret"
  sender_name: "出生信息服务"

logging:
  level: "debug"
  file: "app.log"
  max_size: 100
  max_backups: 3
  max_age: 28

rate_limit:
  enabled: true
  requests_per_second: 5.5

timeouts:
  api_request: 45
  email_send: 20
"#;

/// Smallest configuration that passes validation
pub const MINIMAL_CONFIG_YAML: &str = r#"
api:
  endpoint: "http://localhost:5001/v1/workflows/run"
  dify_api_key: "app-test-key"

mail:
  smtp_server: "localhost"
  smtp_username: "noreply@example.com"
  smtp_password: "secret"
"#;
