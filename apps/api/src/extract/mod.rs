//! Text extraction from uploaded resume documents.
//!
//! Dispatch is by file extension (case-insensitive). Only PDF and DOCX are
//! supported; anything else is rejected before extraction runs.

pub mod docx;
pub mod pdf;

use crate::errors::AppError;

const EXTRACTION_FAILED_MSG: &str =
    "Could not extract text from the document. It might be an image-based file or corrupted.";

/// Extracts plain text from an uploaded document, dispatching on extension.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let lower = filename.to_lowercase();

    let text = if lower.ends_with(".pdf") {
        pdf::extract_text(data)
    } else if lower.ends_with(".docx") {
        docx::extract_text(data)
    } else {
        return Err(AppError::Validation("Unsupported file type".to_string()));
    };

    match text {
        Ok(t) if !t.trim().is_empty() => Ok(t),
        Ok(_) => Err(AppError::Extraction(EXTRACTION_FAILED_MSG.to_string())),
        Err(e) => {
            tracing::warn!(filename, "Text extraction failed: {e}");
            Err(AppError::Extraction(EXTRACTION_FAILED_MSG.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_validation_error() {
        let err = extract_text("resume.txt", b"hello").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Unsupported file type"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        // Garbage bytes: dispatch must reach the PDF extractor and fail there,
        // not be rejected as an unsupported type.
        let err = extract_text("resume.PDF", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_empty_document_is_extraction_error() {
        let err = extract_text("resume.docx", b"not a zip").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
