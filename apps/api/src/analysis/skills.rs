//! Skill keyword detection.
//!
//! Matches a fixed inventory of common technical and professional skills
//! against the resume text, case-insensitively and on word boundaries.
//! Patterns are compiled once at first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Skill inventory, lowercase. Order here is the order skills are reported in.
const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "git",
    "react",
    "aws",
    "docker",
    "machine learning",
    "data analysis",
    "c#",
    "typescript",
    "go",
    "php",
    "swift",
    "kotlin",
    "node.js",
    "angular",
    "vue.js",
    "django",
    "spring boot",
    "html5",
    "css3",
    "restful apis",
    "mysql",
    "postgresql",
    "mongodb",
    "nosql",
    "azure",
    "google cloud platform",
    "kubernetes",
    "ci/cd",
    "jenkins",
    "terraform",
    "agile methodologies",
    "scrum",
    "jira",
    "linux",
    "system design",
    "api design",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "data visualization",
    "project management",
    "problem solving",
    "communication",
    "leadership",
    "ruby on rails",
    "scala",
    "perl",
    "bash scripting",
    "powershell",
    "asp.net",
    "laravel",
    "graphql",
    "next.js",
    "svelte",
    "bootstrap",
    "tailwind css",
    "sass",
    "webpack",
    "microservices architecture",
    "serverless architecture",
    "aws lambda",
    "apache spark",
    "hadoop",
    "kafka",
    "tableau",
    "power bi",
    "natural language processing",
    "computer vision",
    "deep learning",
    "android development",
    "ios development",
    "react native",
    "flutter",
    "xamarin",
    "ansible",
    "prometheus",
    "grafana",
    "elasticsearch",
    "redis",
    "object-oriented programming",
    "functional programming",
    "test-driven development",
    "unit testing",
    "network security",
    "penetration testing",
    "cryptography",
    "ui/ux design",
    "product management",
    "business analysis",
    "technical writing",
    "seo",
    "data warehousing",
    "rust",
];

static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
            (*skill, Regex::new(&pattern).expect("regex: skill pattern"))
        })
        .collect()
});

/// Returns the skills present in the text, capitalised, in inventory order.
pub fn find_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| capitalize(skill))
        .collect()
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
