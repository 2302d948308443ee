//! PDF text extraction.
//!
//! `pdf_extract` can panic on malformed input instead of returning an error, so
//! every call is wrapped in `catch_unwind` and the panic becomes an
//! `ExtractionError`.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Malformed(String),

    #[error("PDF extraction panicked (malformed document)")]
    Panicked,
}

/// Turns the bytes of a page-based document into plain text.
///
/// Implementations are synchronous and may be CPU-heavy; callers run them on
/// the blocking pool.
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Default extractor backed by `pdf-extract`. No OCR, no layout reconstruction.
pub struct PdfTextExtractor;

impl DocumentExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = extract_pages(bytes)?;
        Ok(join_pages(pages))
    }
}

/// One `String` per page, in page order.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Malformed(e.to_string())),
        Err(_) => Err(ExtractionError::Panicked),
    }
}

/// Pages without text contribute nothing; order is preserved.
fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}

/// Returns true if the uploaded file name carries a `.pdf` suffix (any case).
pub fn has_pdf_suffix(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}
