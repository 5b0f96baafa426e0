use serde::{Deserialize, Serialize};

/// Full analysis report returned to callers.
///
/// Field names are the wire contract — the frontend reads `score`,
/// `details.email`, `details.phone`, `details.skills`, `details.analysis_notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// ATS compatibility score, 0–100.
    pub score: u32,
    pub details: AnalysisDetails,
}

/// Details extracted from the resume text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// First email address found, or "Not Found".
    pub email: String,
    /// First phone number found, or "Not Found".
    pub phone: String,
    /// Detected skills, capitalised, in skill-list order.
    pub skills: Vec<String>,
    /// Human-readable findings, in the order the checks ran.
    pub analysis_notes: Vec<String>,
}

impl AnalysisDetails {
    pub fn new() -> Self {
        AnalysisDetails {
            email: "Not Found".to_string(),
            phone: "Not Found".to_string(),
            skills: Vec::new(),
            analysis_notes: Vec::new(),
        }
    }
}

impl Default for AnalysisDetails {
    fn default() -> Self {
        Self::new()
    }
}
