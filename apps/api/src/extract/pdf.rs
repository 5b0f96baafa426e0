use anyhow::{anyhow, Result};

/// Extracts text from an in-memory PDF document.
pub fn extract_text(data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| anyhow!("PDF extraction error: {e}"))
}
