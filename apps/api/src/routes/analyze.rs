//! POST /analyze — multipart resume upload, extraction, and analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::report::AnalysisReport;
use crate::state::AppState;

/// The multipart field name the frontend and CLI both send.
const RESUME_FIELD: &str = "resume";

pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".to_string()));
        }

        let data = field.bytes().await.map_err(|e| {
            if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::Validation(format!("Invalid file: {e}"))
            }
        })?;

        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| AppError::Validation("No file part".to_string()))?;

    info!(%filename, bytes = data.len(), "Analyzing uploaded resume");

    let text = extract_text(&filename, &data)?;
    let report = state.analyzer.analyze(&text).await?;

    info!(%filename, score = report.score, "Analysis complete");

    Ok(Json(report))
}
