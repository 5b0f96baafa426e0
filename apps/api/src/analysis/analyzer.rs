//! Resume analyzer — pluggable, trait-based scorer over extracted resume text.
//!
//! Default: `HeuristicAnalyzer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn ResumeAnalyzer>`.

use async_trait::async_trait;

use crate::analysis::contact::{find_email, find_phone};
use crate::analysis::sections::count_standard_headers;
use crate::analysis::skills::find_skills;
use crate::errors::AppError;
use crate::models::report::{AnalysisDetails, AnalysisReport};

/// Resumes shorter than this are treated as unparseable and capped.
const MIN_PARSEABLE_LEN: usize = 500;
/// Headers needed to count as "well-structured".
const MIN_STANDARD_HEADERS: usize = 3;
/// Points per detected skill, capped at SKILLS_MAX.
const SKILL_POINTS: u32 = 5;
const SKILLS_MAX: u32 = 25;

/// The analyzer trait. Implement this to swap scoring backends without
/// touching the endpoint or handler code.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisReport, AppError>;
}

/// Weighted heuristic analyzer.
///
/// Score composition (max 100):
/// - Contact information: 15 (email) + 15 (phone)
/// - Skills: 5 per detected skill, max 25
/// - Structure: 25 when at least 3 standard headers are present
/// - Length: 20 when the text exceeds 500 characters; below that the
///   total is additionally capped at 30 (unreadable-document penalty)
pub struct HeuristicAnalyzer;

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisReport, AppError> {
        Ok(analyze_text(text))
    }
}

fn analyze_text(text: &str) -> AnalysisReport {
    let mut score: u32 = 0;
    let mut details = AnalysisDetails::new();

    // Contact information (weight 30%)
    match find_email(text) {
        Some(email) => {
            details.email = email.to_string();
            score += 15;
            details.analysis_notes.push("✔️ Email found.".to_string());
        }
        None => details
            .analysis_notes
            .push("❌ Email not found. ATS may miss it.".to_string()),
    }

    match find_phone(text) {
        Some(phone) => {
            details.phone = phone.to_string();
            score += 15;
            details
                .analysis_notes
                .push("✔️ Phone number found.".to_string());
        }
        None => details
            .analysis_notes
            .push("❌ Phone number not found.".to_string()),
    }

    // Keyword and section analysis (weight 50%)
    details.skills = find_skills(text);
    if details.skills.is_empty() {
        details
            .analysis_notes
            .push("⚠️ No common skills found. Add a skills section.".to_string());
    } else {
        score += (details.skills.len() as u32 * SKILL_POINTS).min(SKILLS_MAX);
        details.analysis_notes.push(format!(
            "✔️ Found {} relevant skills.",
            details.skills.len()
        ));
    }

    if count_standard_headers(text) >= MIN_STANDARD_HEADERS {
        score += 25;
        details
            .analysis_notes
            .push("✔️ Well-structured with standard headers.".to_string());
    } else {
        details
            .analysis_notes
            .push("⚠️ Lacks standard headers (Experience, Skills, etc.).".to_string());
    }

    // Readability and formatting (weight 20%)
    // Character count, not byte count: multi-byte text must not cross the
    // threshold early.
    if text.chars().count() > MIN_PARSEABLE_LEN {
        score += 20;
        details
            .analysis_notes
            .push("✔️ Good length, likely parseable.".to_string());
    } else {
        details
            .analysis_notes
            .push("❌ Resume is too short or text extraction failed.".to_string());
        score = score.min(30);
    }

    AnalysisReport { score, details }
}
