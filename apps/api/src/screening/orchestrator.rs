//! Screening pipeline: validate → extract → prompt → model call → strip fences → decode.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::fences::decode_json;
use crate::llm_client::LanguageModel;
use crate::screening::extract::{has_pdf_suffix, DocumentExtractor};
use crate::screening::models::AnalysisResult;
use crate::screening::prompts::{build_screening_prompt, SCREENING_SYSTEM};

pub const MISSING_INPUT: &str = "Missing resume or job description";
pub const INVALID_DOCUMENT: &str = "Invalid or missing PDF file";

/// The uploaded `resume` part as received.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// A request that passed validation. Only `validate` constructs one.
#[derive(Debug, Clone)]
pub struct ScreeningRequest {
    file_name: String,
    document: Bytes,
    job_description: String,
}

impl ScreeningRequest {
    /// Checks that both inputs are present and the document looks like a PDF upload.
    pub fn validate(
        resume: Option<UploadedDocument>,
        job_description: Option<String>,
    ) -> Result<Self, AppError> {
        let (resume, job_description) = match (resume, job_description) {
            (Some(r), Some(jd)) if !jd.trim().is_empty() => (r, jd),
            _ => return Err(AppError::Validation(MISSING_INPUT.to_string())),
        };

        if resume.file_name.is_empty() || !has_pdf_suffix(&resume.file_name) {
            return Err(AppError::Validation(INVALID_DOCUMENT.to_string()));
        }
        if resume.bytes.is_empty() {
            return Err(AppError::Validation(INVALID_DOCUMENT.to_string()));
        }

        Ok(Self {
            file_name: resume.file_name,
            document: resume.bytes,
            job_description,
        })
    }
}

/// Owns the injected collaborators. One instance serves every request.
pub struct Screener {
    extractor: Arc<dyn DocumentExtractor>,
    model: Arc<dyn LanguageModel>,
}

impl Screener {
    pub fn new(extractor: Arc<dyn DocumentExtractor>, model: Arc<dyn LanguageModel>) -> Self {
        Self { extractor, model }
    }

    pub async fn screen(&self, request: ScreeningRequest) -> Result<AnalysisResult, AppError> {
        let span = info_span!(
            "screen_resume",
            request_id = %Uuid::new_v4(),
            file = %request.file_name,
        );
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: ScreeningRequest) -> Result<AnalysisResult, AppError> {
        let resume_text = self.extract(request.document).await?;
        info!("Extracted {} chars of resume text", resume_text.chars().count());

        let prompt = build_screening_prompt(&resume_text, &request.job_description);
        let raw = self
            .model
            .generate(&prompt, SCREENING_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

        let result = decode_json::<AnalysisResult>(&raw).map_err(|e| {
            error!(raw_response = %raw, "Failed to decode JSON from model response");
            AppError::Decode(e.to_string())
        })?;

        info!(match_score = %result.match_score, "Screening complete");
        Ok(result)
    }

    async fn extract(&self, document: Bytes) -> Result<String, AppError> {
        let extractor = Arc::clone(&self.extractor);
        tokio::task::spawn_blocking(move || extractor.extract_text(&document))
            .await
            .map_err(|e| AppError::Extraction(format!("extraction task aborted: {e}")))?
            .map_err(|e| AppError::Extraction(e.to_string()))
    }
}
