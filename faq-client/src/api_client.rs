use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::{ApiResponse, FaqInput, FaqRecord, ServerStatus};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Transport seam between the UI controller and the FAQ API.
#[async_trait]
pub trait FaqBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<FaqRecord>, ApiError>;
    async fn get(&self, id: &str) -> Result<FaqRecord, ApiError>;
    async fn create(&self, input: &FaqInput) -> Result<FaqRecord, ApiError>;
    async fn update(&self, id: &str, input: &FaqInput) -> Result<FaqRecord, ApiError>;
    async fn delete(&self, id: &str) -> Result<FaqRecord, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn faqs_url(&self) -> String {
        format!("{}/api/faqs", self.base_url)
    }

    fn faq_url(&self, id: &str) -> String {
        format!("{}/api/faqs/{}", self.base_url, id)
    }

    pub async fn health(&self) -> Result<ServerStatus, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        self.send(self.client.get(&url)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        debug!(%status, url = %response.url(), "FAQ API response");

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        decode_envelope(status, &body)
    }
}

/// Unwraps an `ApiResponse` body, turning failure envelopes into `ApiError::HttpStatus`.
pub fn decode_envelope<T: DeserializeOwned>(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<T, ApiError> {
    let envelope: ApiResponse<T> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(ApiError::HttpStatus {
                status,
                code: None,
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string(),
            });
        }
        Err(e) => return Err(ApiError::ParseFailed(e.to_string())),
    };

    if !status.is_success() || !envelope.success {
        return Err(ApiError::HttpStatus {
            status,
            code: envelope.error,
            message: envelope.message,
        });
    }

    envelope
        .data
        .ok_or_else(|| ApiError::ParseFailed("Response envelope has no data".to_string()))
}

#[async_trait]
impl FaqBackend for ApiClient {
    async fn list(&self) -> Result<Vec<FaqRecord>, ApiError> {
        self.send(self.client.get(self.faqs_url())).await
    }

    async fn get(&self, id: &str) -> Result<FaqRecord, ApiError> {
        self.send(self.client.get(self.faq_url(id))).await
    }

    async fn create(&self, input: &FaqInput) -> Result<FaqRecord, ApiError> {
        self.send(self.client.post(self.faqs_url()).json(input))
            .await
    }

    async fn update(&self, id: &str, input: &FaqInput) -> Result<FaqRecord, ApiError> {
        self.send(self.client.put(self.faq_url(id)).json(input))
            .await
    }

    async fn delete(&self, id: &str) -> Result<FaqRecord, ApiError> {
        self.send(self.client.delete(self.faq_url(id))).await
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::HttpStatus { status, .. } if *status == reqwest::StatusCode::NOT_FOUND)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::HttpStatus { status, .. } if *status == reqwest::StatusCode::BAD_REQUEST)
    }

    /// Message suitable for the feedback banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::HttpStatus { message, .. } => message.clone(),
            ApiError::RequestFailed(_) => "Could not reach the server".to_string(),
            ApiError::ParseFailed(_) => "The server sent an unexpected response".to_string(),
        }
    }
}
