//! Client-side view of the analysis service wire contract.

use serde::Deserialize;

/// Success payload of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    pub score: u32,
    pub details: AnalysisDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDetails {
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub analysis_notes: Vec<String>,
}

/// Failure payload of `POST /analyze`. The `error` field is optional on the
/// wire; absence falls back to a generic message at the call site.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
