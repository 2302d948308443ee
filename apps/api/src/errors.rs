use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`. Only validation messages
/// reach the client verbatim; server-side detail is logged and replaced with a
/// fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                "Failed to extract text from the PDF".to_string()
            }
            AppError::Decode(msg) => {
                tracing::error!("Decode error: {msg}");
                "Failed to parse the analysis from the AI model".to_string()
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                "An error occurred while analyzing the resume".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
