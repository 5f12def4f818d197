use serde::{Deserialize, Serialize};

/// Exactly one label per sentence, assigned by the first matching
/// triage rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLabel {
    Pro,
    Con,
    HiddenDetail,
    Neutral,
}

/// Triager output surfaced to callers. Neutral sentences are counted
/// during the pass but never leave the triager.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TriageResult {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub hidden_details: Vec<String>,
}
