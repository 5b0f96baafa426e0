//! Contact information extraction (email and phone).

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("regex: email")
});

// Optional area code (with or without parens), then NNN-NNNN with -, . or
// space separators. Loose on purpose: ATS phone formats vary widely.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}").expect("regex: phone")
});

/// Returns the first email address in the text, if any.
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// Returns the first phone number in the text, if any.
pub fn find_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str())
}
