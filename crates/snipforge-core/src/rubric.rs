//! Rubric text processing
//!
//! Uploaded evaluation rubrics arrive as raw text extracted from Word
//! documents. This module cleans the extraction artifacts and applies light
//! heuristics to recover the rubric's structure for display and for the
//! generation prompt.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ALL_CAPS_RE: OnceLock<Regex> = OnceLock::new();
static NUMBERED_RE: OnceLock<Regex> = OnceLock::new();
static COLON_RE: OnceLock<Regex> = OnceLock::new();
static CRITERION_RE: OnceLock<Regex> = OnceLock::new();
static CRITERION_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// A heading with the body text that followed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricSection {
    pub heading: String,
    pub content: String,
}

/// Structured view of a rubric document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RubricStructure {
    /// First line of the document, when present
    pub title: Option<String>,
    /// Heading-delimited sections in document order
    pub sections: Vec<RubricSection>,
    /// Bullet or numbered criterion lines, prefix stripped
    pub criteria: Vec<String>,
}

/// Clean raw rubric text extracted from a Word document
///
/// Normalizes line endings, trims every line, and drops blank lines.
pub fn process_rubric_content(raw_text: &str) -> String {
    raw_text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract structured rubric information from cleaned content
///
/// A line reads as a heading when it is all-caps, numbered (`1.`), or ends
/// with a colon, and is shorter than 100 characters. Criterion lines start
/// with a bullet marker or a number.
pub fn parse_rubric_structure(content: &str) -> RubricStructure {
    let lines: Vec<&str> = content.lines().collect();
    let mut structure = RubricStructure {
        title: lines.first().map(|line| line.to_string()),
        sections: Vec::new(),
        criteria: Vec::new(),
    };

    let mut current_section: Option<RubricSection> = None;

    for line in lines.iter().skip(1) {
        if is_heading(line) {
            if let Some(section) = current_section.take() {
                structure.sections.push(section);
            }
            current_section = Some(RubricSection {
                heading: line.to_string(),
                content: String::new(),
            });
        } else if let Some(section) = current_section.as_mut() {
            if !section.content.is_empty() {
                section.content.push('\n');
            }
            section.content.push_str(line);
        }

        if is_criterion(line) {
            structure.criteria.push(strip_criterion_prefix(line));
        }
    }

    if let Some(section) = current_section {
        structure.sections.push(section);
    }

    structure
}

fn is_heading(line: &str) -> bool {
    if line.len() >= 100 {
        return false;
    }

    let all_caps = ALL_CAPS_RE
        .get_or_init(|| Regex::new(r"^[A-Z\s]+$").expect("all-caps pattern is valid"));
    let numbered =
        NUMBERED_RE.get_or_init(|| Regex::new(r"^\d+\.").expect("numbered pattern is valid"));
    let colon =
        COLON_RE.get_or_init(|| Regex::new(r"^[A-Za-z\s]+:$").expect("colon pattern is valid"));

    all_caps.is_match(line) || numbered.is_match(line) || colon.is_match(line)
}

fn is_criterion(line: &str) -> bool {
    CRITERION_RE
        .get_or_init(|| {
            Regex::new(r"^[-*•]\s|^\d+[.)]\s").expect("criterion pattern is valid")
        })
        .is_match(line)
}

fn strip_criterion_prefix(line: &str) -> String {
    CRITERION_PREFIX_RE
        .get_or_init(|| {
            Regex::new(r"^(?:[-*•]|\d+[.)])\s+").expect("criterion prefix pattern is valid")
        })
        .replace(line, "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_normalizes_line_endings() {
        let cleaned = process_rubric_content("first\r\nsecond\rthird");
        assert_eq!(cleaned, "first\nsecond\nthird");
    }

    #[test]
    fn test_process_trims_and_drops_blank_lines() {
        let cleaned = process_rubric_content("  a  \n\n\n\n  b\n   \nc  ");
        assert_eq!(cleaned, "a\nb\nc");
    }

    #[test]
    fn test_parse_title_is_first_line() {
        let structure = parse_rubric_structure("Grading Rubric\nsome text");
        assert_eq!(structure.title.as_deref(), Some("Grading Rubric"));
    }

    #[test]
    fn test_parse_sections_by_heading_styles() {
        let content = "Rubric\nSCORING\npoints matter\nProcess:\nfollow steps";
        let structure = parse_rubric_structure(content);

        assert_eq!(structure.sections.len(), 2);
        assert_eq!(structure.sections[0].heading, "SCORING");
        assert_eq!(structure.sections[0].content, "points matter");
        assert_eq!(structure.sections[1].heading, "Process:");
        assert_eq!(structure.sections[1].content, "follow steps");
    }

    #[test]
    fn test_parse_criteria_bullets_and_numbers() {
        let content = "Rubric\n- clarity of argument\n* cites sources\n1. uses evidence";
        let structure = parse_rubric_structure(content);

        assert_eq!(
            structure.criteria,
            vec!["clarity of argument", "cites sources", "uses evidence"]
        );
    }

    #[test]
    fn test_parse_empty_content() {
        let structure = parse_rubric_structure("");
        assert!(structure.title.is_none());
        assert!(structure.sections.is_empty());
        assert!(structure.criteria.is_empty());
    }

    #[test]
    fn test_long_shouty_line_is_not_a_heading() {
        let long = "A".repeat(120);
        let content = format!("Rubric\n{long}\nbody");
        let structure = parse_rubric_structure(&content);
        assert!(structure.sections.is_empty());
    }
}
