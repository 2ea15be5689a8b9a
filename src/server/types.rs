use serde::{Deserialize, Serialize};

pub const ACCEPTED_MESSAGE: &str = "请求已接收，正在处理";

/// Fixed reply sent before any background work has run.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgement {
    pub contact: String,
    pub message: String,
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self {
            contact: String::new(),
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
