use serde::{Deserialize, Serialize};

use crate::pipeline::analysis::AnalysisResult;
use crate::pipeline::triage::TriageResult;

/// Cap on each triage-derived summary list.
pub const MAX_TRIAGE_ITEMS: usize = 5;

/// Cap on each finding- and fee-derived summary list.
pub const MAX_FINDING_ITEMS: usize = 3;

/// Placeholder filling the triage lists when no text could be extracted.
pub const NO_TEXT_MESSAGE: &str = "No text extracted from document";

/// Bounded projection of a full analysis, sized for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub hidden_details: Vec<String>,
    pub key_exclusions: Vec<String>,
    pub key_limitations: Vec<String>,
    pub important_requirements: Vec<String>,
    pub critical_deadlines: Vec<String>,
    pub significant_fees: Vec<String>,
    pub coverage_highlights: Vec<String>,
}

impl Summary {
    /// The sentinel summary for the empty-text terminal state.
    pub fn no_text_sentinel() -> Self {
        let placeholder = vec![NO_TEXT_MESSAGE.to_string()];
        Self {
            pros: placeholder.clone(),
            cons: placeholder.clone(),
            hidden_details: placeholder,
            ..Self::default()
        }
    }
}

/// Assemble the summary: pure truncation of the analysis and triage
/// outputs, no new computation.
pub fn build_summary(analysis: &AnalysisResult, triage: &TriageResult) -> Summary {
    Summary {
        pros: take(&triage.pros, MAX_TRIAGE_ITEMS),
        cons: take(&triage.cons, MAX_TRIAGE_ITEMS),
        hidden_details: take(&triage.hidden_details, MAX_TRIAGE_ITEMS),
        key_exclusions: take(&analysis.findings.exclusions, MAX_FINDING_ITEMS),
        key_limitations: take(&analysis.findings.limitations, MAX_FINDING_ITEMS),
        important_requirements: take(&analysis.findings.requirements, MAX_FINDING_ITEMS),
        critical_deadlines: take(&analysis.findings.deadlines, MAX_FINDING_ITEMS),
        // Only the context sentence of a fee mention is worth showing;
        // the bare amount means nothing without it.
        significant_fees: analysis
            .monetary_values
            .iter()
            .take(MAX_FINDING_ITEMS)
            .map(|m| m.context.clone())
            .collect(),
        coverage_highlights: take(&analysis.findings.coverage, MAX_FINDING_ITEMS),
    }
}

fn take(items: &[String], cap: usize) -> Vec<String> {
    items.iter().take(cap).cloned().collect()
}

#[cfg(test)]
mod tests {
    use crate::pipeline::analysis::Mention;

    use super::*;

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{prefix} {i}")).collect()
    }

    #[test]
    fn triage_lists_cap_at_five() {
        let triage = TriageResult {
            pros: numbered("pro", 9),
            cons: numbered("con", 2),
            hidden_details: vec![],
        };
        let summary = build_summary(&AnalysisResult::default(), &triage);
        assert_eq!(summary.pros.len(), 5);
        assert_eq!(summary.pros[0], "pro 1");
        assert_eq!(summary.cons.len(), 2);
        assert!(summary.hidden_details.is_empty());
    }

    #[test]
    fn finding_lists_cap_at_three() {
        let mut analysis = AnalysisResult::default();
        analysis.findings.exclusions = numbered("exclusion", 7);
        analysis.findings.deadlines = numbered("deadline", 1);
        let summary = build_summary(&analysis, &TriageResult::default());
        assert_eq!(summary.key_exclusions.len(), 3);
        assert_eq!(summary.critical_deadlines, vec!["deadline 1"]);
    }

    #[test]
    fn fees_keep_only_the_context_sentence() {
        let mut analysis = AnalysisResult::default();
        analysis.monetary_values = vec![
            Mention::new("$500", "A $500 charge applies to late renewals."),
            Mention::new("$40", "Each visit has a $40 copay."),
        ];
        let summary = build_summary(&analysis, &TriageResult::default());
        assert_eq!(
            summary.significant_fees,
            vec![
                "A $500 charge applies to late renewals.",
                "Each visit has a $40 copay."
            ]
        );
    }

    #[test]
    fn order_is_preserved_under_truncation() {
        let mut analysis = AnalysisResult::default();
        analysis.findings.coverage = numbered("highlight", 4);
        let summary = build_summary(&analysis, &TriageResult::default());
        assert_eq!(summary.coverage_highlights, numbered("highlight", 3));
    }

    #[test]
    fn sentinel_fills_triage_lists_only() {
        let sentinel = Summary::no_text_sentinel();
        assert_eq!(sentinel.pros, vec![NO_TEXT_MESSAGE]);
        assert_eq!(sentinel.cons, vec![NO_TEXT_MESSAGE]);
        assert_eq!(sentinel.hidden_details, vec![NO_TEXT_MESSAGE]);
        assert!(sentinel.key_exclusions.is_empty());
        assert!(sentinel.significant_fees.is_empty());
    }
}
