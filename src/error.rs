use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(&'static str),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("request body too large")]
    BodyTooLarge,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Failed to save inquiry: {0}")]
    InquiryNotSaved(#[source] SqlxError),

    #[error("Failed to subscribe: {0}")]
    SubscribeFailed(#[source] SqlxError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Mail relay rejected the message with status {status}: {detail}")]
    MailRejected { status: u16, detail: String },
}

impl From<figment::Error> for DeskError {
    fn from(e: figment::Error) -> Self {
        DeskError::Config(Box::new(e))
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            DeskError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            DeskError::MalformedBody(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
            DeskError::BodyTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "request body too large".to_string(),
            ),
            DeskError::InquiryNotSaved(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save inquiry".to_string(),
            ),
            DeskError::SubscribeFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to subscribe".to_string(),
            ),
            DeskError::DatabaseError(_)
            | DeskError::Reqwest(_)
            | DeskError::MailRejected { .. }
            | DeskError::Config(_)
            | DeskError::UrlParse(_)
            | DeskError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Flat error payload returned by every endpoint: `{"error": "..."}`.
#[derive(Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
