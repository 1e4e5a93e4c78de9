use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wrapper used by every `/api` response, success and failure alike.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub data: Option<T>,
    /// Short machine-readable code, e.g. `not_found`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code,
            data: Some(data),
            error: None,
            message: message.into(),
        }
    }

    pub fn failure(status_code: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            data: None,
            error: Some(error.into()),
            message: message.into(),
        }
    }

    /// Unwraps the payload of a successful response.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
    #[ts(type = "number")]
    pub uptime: u64,
    #[ts(type = "number")]
    pub faq_count: usize,
}
