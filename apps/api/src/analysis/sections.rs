//! Resume structure checks: standard section headers and overall length.

use once_cell::sync::Lazy;
use regex::Regex;

/// Section headers ATS parsers key on.
const STANDARD_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
];

static HEADER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    STANDARD_HEADERS
        .iter()
        .map(|h| Regex::new(&format!(r"(?i)\b{h}\b")).expect("regex: section header"))
        .collect()
});

/// Counts how many of the standard section headers appear in the text.
pub fn count_standard_headers(text: &str) -> usize {
    HEADER_PATTERNS.iter().filter(|re| re.is_match(text)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_distinct_headers_once() {
        let text = "EXPERIENCE\n...\nExperience continued\nEducation\nSkills";
        assert_eq!(count_standard_headers(text), 3);
    }

    #[test]
    fn test_headers_inside_sentences_still_count() {
        // Matches the header-keyword heuristic: presence anywhere counts.
        assert_eq!(count_standard_headers("my education and projects"), 2);
    }

    #[test]
    fn test_empty_text_counts_zero() {
        assert_eq!(count_standard_headers(""), 0);
    }
}
