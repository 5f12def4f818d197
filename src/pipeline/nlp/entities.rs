use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Labels the recognizer can emit. Only dates are recognized today, and
/// only dates are consumed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Date,
}

/// A recognized entity: label plus the matched text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

/// Named-entity recognition capability.
pub trait EntityRecognizer {
    fn recognize(&self, sentence: &str) -> Vec<Entity>;
}

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|\
                      november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec";

/// A compiled date pattern with its validation requirement.
struct DatePattern {
    regex: Regex,
    /// Fully-numeric forms get calendar validation via chrono; textual
    /// and duration forms are accepted as matched.
    validate: bool,
}

static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        // ISO 8601: 2024-01-15
        pattern(r"\b\d{4}-\d{2}-\d{2}\b", true),
        // Numeric: 01/15/2024, 15-01-2024, 1/5/24
        pattern(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b", true),
        // Month-first textual: January 15, 2024 / Jan 15 2024
        pattern(
            &format!(r"(?i)\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
            false,
        ),
        // Day-first textual: 15 January 2024 / 1st Mar 2025
        pattern(
            &format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\.?,?\s+\d{{4}}\b"),
            false,
        ),
        // Month and year: March 2025
        pattern(&format!(r"(?i)\b(?:{MONTHS})\.?\s+\d{{4}}\b"), false),
        // Durations, which policy deadlines are usually phrased as:
        // 30 days, 2 years, 1 month
        pattern(r"(?i)\b\d+\s+(?:day|week|month|year)s?\b", false),
    ]
});

fn pattern(regex_str: &str, validate: bool) -> DatePattern {
    DatePattern {
        regex: Regex::new(regex_str).expect("invalid date pattern"),
        validate,
    }
}

/// Calendar-validate a fully-numeric date string.
fn is_plausible_date(text: &str) -> bool {
    const FORMATS: &[&str] = &[
        "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%m-%d-%Y", "%d-%m-%Y", "%m/%d/%y", "%d/%m/%y",
        "%m-%d-%y", "%d-%m-%y",
    ];
    FORMATS
        .iter()
        .any(|f| chrono::NaiveDate::parse_from_str(text, f).is_ok())
}

/// Regex-based date recognizer standing in for a statistical NER model.
/// Matches calendar dates and the duration phrases deadline clauses use,
/// mirroring what a DATE entity tag covers.
pub struct DateRecognizer;

impl EntityRecognizer for DateRecognizer {
    fn recognize(&self, sentence: &str) -> Vec<Entity> {
        let mut spans: Vec<(usize, usize, &str)> = Vec::new();

        for dp in DATE_PATTERNS.iter() {
            for mat in dp.regex.find_iter(sentence) {
                if dp.validate && !is_plausible_date(mat.as_str()) {
                    continue;
                }
                spans.push((mat.start(), mat.end(), mat.as_str()));
            }
        }

        dedupe_contained_spans(&mut spans);

        spans
            .into_iter()
            .map(|(_, _, text)| Entity {
                label: EntityLabel::Date,
                text: text.to_string(),
            })
            .collect()
    }
}

/// Drop spans fully contained in an earlier, longer span; order by offset.
fn dedupe_contained_spans(spans: &mut Vec<(usize, usize, &str)>) {
    spans.sort_by_key(|&(start, end, _)| (start, std::cmp::Reverse(end)));
    let mut i = 0;
    while i < spans.len() {
        let mut j = i + 1;
        while j < spans.len() {
            if spans[j].0 >= spans[i].0 && spans[j].1 <= spans[i].1 {
                spans.remove(j);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}
