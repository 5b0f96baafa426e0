//! Analysis rendering: the view-model derived from a report, the view seam
//! the controller draws through, and the terminal implementation.

use crate::model::AnalysisReport;

/// Width of the terminal score gauge, in cells.
const GAUGE_WIDTH: usize = 36;
/// Full angular extent of the score gauge, in degrees.
const FULL_CIRCLE_DEG: f64 = 360.0;

/// Presentation-ready projection of an `AnalysisReport`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    /// `"{score}%"`.
    pub score_text: String,
    /// Score mapped linearly from [0, 100] to [0, 360] degrees.
    pub fill_angle_deg: f64,
    pub email: String,
    pub phone: String,
    /// Skills joined with ", ", or the literal "None" when empty.
    pub skills_line: String,
    /// Notes in response order, untruncated.
    pub notes: Vec<String>,
}

impl ReportView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let skills_line = if report.details.skills.is_empty() {
            "None".to_string()
        } else {
            report.details.skills.join(", ")
        };

        ReportView {
            score_text: format!("{}%", report.score),
            fill_angle_deg: f64::from(report.score) * 3.6,
            email: report.details.email.clone(),
            phone: report.details.phone.clone(),
            skills_line,
            notes: report.details.analysis_notes.clone(),
        }
    }
}

/// The surface the controller draws on. Injected so tests observe loading
/// transitions, errors, and rendered output without a terminal.
pub trait AnalysisView: Send + Sync {
    /// Loading indicator shown; previous results considered stale.
    fn start_loading(&self);
    /// Loading indicator cleared. Called on every exit path.
    fn finish_loading(&self);
    fn show_error(&self, message: &str);
    fn render(&self, view: &ReportView);
}

/// Plain-terminal view: progress to stderr, results to stdout.
pub struct TerminalView;

impl AnalysisView for TerminalView {
    fn start_loading(&self) {
        eprintln!("Analyzing resume…");
    }

    fn finish_loading(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn render(&self, view: &ReportView) {
        let filled =
            ((view.fill_angle_deg / FULL_CIRCLE_DEG) * GAUGE_WIDTH as f64).round() as usize;
        let filled = filled.min(GAUGE_WIDTH);
        let gauge: String = "█".repeat(filled) + &"░".repeat(GAUGE_WIDTH - filled);

        println!("ATS Score: {}", view.score_text);
        println!("[{gauge}]");
        println!();
        println!("Email: {}", view.email);
        println!("Phone: {}", view.phone);
        println!("Detected Skills: {}", view.skills_line);
        println!();
        println!("Analysis Notes:");
        for note in &view.notes {
            println!("  - {note}");
        }
    }
}
