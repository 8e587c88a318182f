use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl BlogClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Self::from_status_and_body(status, &text)
    }

    pub(crate) fn from_status_and_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string());

        if status == StatusCode::NOT_FOUND {
            BlogClientError::NotFound(message)
        } else {
            BlogClientError::Server { status, message }
        }
    }
}
