// Heuristic ATS analysis: contact extraction, skill detection, structure
// checks, and score composition. No network calls; pure functions behind
// the `ResumeAnalyzer` trait.

pub mod analyzer;
pub mod contact;
pub mod sections;
pub mod skills;
