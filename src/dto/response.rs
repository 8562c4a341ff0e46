use axum::http::StatusCode;
use serde::Serialize;

/// Success envelope without a payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "httpCode")]
    pub http_code: u16,
    pub message: String,
}

impl MessageResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            http_code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Success envelope carrying a payload.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    #[serde(rename = "httpCode")]
    pub http_code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            http_code: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}
