use crate::pipeline::nlp::{EntityLabel, EntityRecognizer, SentenceSegmenter};

use super::keywords::first_matching_term;
use super::mentions::{monetary_mentions, percentage_mentions};
use super::types::{dedup_preserving_order, AnalysisResult, ClauseCategory, Mention};

/// Sentences with fewer whitespace-separated words than this carry no
/// usable clause signal and are skipped entirely.
const MIN_CLAUSE_WORDS: usize = 3;

/// Scan `text` for clause findings and value mentions.
///
/// Every retained sentence is tested against all seven categories
/// independently (first matching term wins per category), then mined for
/// currency amounts, percentages, and date entities. Finding lists are
/// deduplicated order-preserving; mention lists are not.
pub fn find_clauses(
    text: &str,
    segmenter: &dyn SentenceSegmenter,
    recognizer: &dyn EntityRecognizer,
) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for sentence in segmenter.segment(text) {
        if sentence.split_whitespace().count() < MIN_CLAUSE_WORDS {
            continue;
        }

        for category in ClauseCategory::ALL {
            if first_matching_term(category, &sentence).is_some() {
                result
                    .findings
                    .category_mut(category)
                    .push(sentence.trim().to_string());
            }
        }

        result.monetary_values.extend(monetary_mentions(&sentence));
        result.percentages.extend(percentage_mentions(&sentence));

        for entity in recognizer.recognize(&sentence) {
            if entity.label == EntityLabel::Date {
                result.dates.push(Mention::new(&entity.text, &sentence));
            }
        }
    }

    for category in ClauseCategory::ALL {
        dedup_preserving_order(result.findings.category_mut(category));
    }

    tracing::debug!(
        findings = result.findings.total(),
        monetary = result.monetary_values.len(),
        percentages = result.percentages.len(),
        dates = result.dates.len(),
        "Clause scan complete"
    );

    result
}
