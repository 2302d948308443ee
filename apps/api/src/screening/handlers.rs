//! Axum route handler for the screening API.

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::screening::models::AnalysisResult;
use crate::screening::orchestrator::{ScreeningRequest, UploadedDocument};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const UPLOAD_TOO_LARGE: &str = "Resume exceeds the upload size limit";

/// POST /screen_resume
///
/// Multipart body with a `resume` file part and a `job_description` text part.
/// Returns the model's structured analysis, or `{"error": ...}` on failure.
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut multipart = multipart
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;

    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_body)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(invalid_body)?;
                resume = Some(UploadedDocument { file_name, bytes });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(invalid_body)?);
            }
            _ => {}
        }
    }

    let request = ScreeningRequest::validate(resume, job_description)?;
    let result = state.screener.screen(request).await?;
    Ok(Json(result))
}

fn invalid_body(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Validation(UPLOAD_TOO_LARGE.to_string());
    }
    AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
}
