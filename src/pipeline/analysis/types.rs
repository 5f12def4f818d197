use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The fixed, closed set of clause categories scanned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseCategory {
    Exclusions,
    Limitations,
    Requirements,
    Deadlines,
    Fees,
    Coverage,
    Conditions,
}

impl ClauseCategory {
    pub const ALL: [ClauseCategory; 7] = [
        ClauseCategory::Exclusions,
        ClauseCategory::Limitations,
        ClauseCategory::Requirements,
        ClauseCategory::Deadlines,
        ClauseCategory::Fees,
        ClauseCategory::Coverage,
        ClauseCategory::Conditions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exclusions => "exclusions",
            Self::Limitations => "limitations",
            Self::Requirements => "requirements",
            Self::Deadlines => "deadlines",
            Self::Fees => "fees",
            Self::Coverage => "coverage",
            Self::Conditions => "conditions",
        }
    }
}

/// Per-category finding lists. All seven categories are always present,
/// also after serialization, so consumers never have to probe for keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Findings {
    pub exclusions: Vec<String>,
    pub limitations: Vec<String>,
    pub requirements: Vec<String>,
    pub deadlines: Vec<String>,
    pub fees: Vec<String>,
    pub coverage: Vec<String>,
    pub conditions: Vec<String>,
}

impl Findings {
    pub fn category(&self, category: ClauseCategory) -> &Vec<String> {
        match category {
            ClauseCategory::Exclusions => &self.exclusions,
            ClauseCategory::Limitations => &self.limitations,
            ClauseCategory::Requirements => &self.requirements,
            ClauseCategory::Deadlines => &self.deadlines,
            ClauseCategory::Fees => &self.fees,
            ClauseCategory::Coverage => &self.coverage,
            ClauseCategory::Conditions => &self.conditions,
        }
    }

    pub fn category_mut(&mut self, category: ClauseCategory) -> &mut Vec<String> {
        match category {
            ClauseCategory::Exclusions => &mut self.exclusions,
            ClauseCategory::Limitations => &mut self.limitations,
            ClauseCategory::Requirements => &mut self.requirements,
            ClauseCategory::Deadlines => &mut self.deadlines,
            ClauseCategory::Fees => &mut self.fees,
            ClauseCategory::Coverage => &mut self.coverage,
            ClauseCategory::Conditions => &mut self.conditions,
        }
    }

    pub fn total(&self) -> usize {
        ClauseCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }
}

/// An extracted literal (currency amount, percentage, or date text)
/// paired with its full source sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub value: String,
    pub context: String,
}

impl Mention {
    pub fn new(value: &str, context: &str) -> Self {
        Self {
            value: value.to_string(),
            context: context.trim().to_string(),
        }
    }
}

/// Full Clause Finder output for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub findings: Findings,
    pub monetary_values: Vec<Mention>,
    pub percentages: Vec<Mention>,
    pub dates: Vec<Mention>,
}

/// Remove duplicates in place, keeping the first occurrence of each
/// entry. Finding lists are deduplicated; mention lists never are.
pub fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}
