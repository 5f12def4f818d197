use crate::pipeline::analysis::types::dedup_preserving_order;
use crate::pipeline::nlp::{SentenceSegmenter, Sentiment, SentimentClassifier, SentimentLabel};

use super::types::{TriageLabel, TriageResult};

/// Sentences with fewer whitespace-separated words than this are not
/// triaged at all.
const MIN_TRIAGE_WORDS: usize = 5;

/// Short sentences with a footnote marker read as fine print.
const HIDDEN_SHORT_SENTENCE_BYTES: usize = 50;

// The triage keyword tests are plain substring containment on the
// lowercased sentence, NOT word-boundary matches — unlike the clause
// tables. That asymmetry is part of the triager's contract.
static PRO_TERMS: &[&str] = &["benefit", "coverage", "included", "advantage", "free", "bonus"];

static CON_TERMS: &[&str] = &[
    "exclusion",
    "not covered",
    "limitation",
    "restrict",
    "charge",
    "fee",
    "co-payment",
];

static HIDDEN_TERMS: &[&str] = &["fine print", "conditions apply", "subject to", "restrictions"];

static FOOTNOTE_MARKERS: &[&str] = &["*", "\u{2020}", "note:", "disclaimer"];

/// The independent boolean signals feeding the triage rules.
#[derive(Debug, Clone, Copy)]
pub struct TriageSignals {
    pub is_pro: bool,
    pub is_con: bool,
    pub is_hidden: bool,
    pub sentiment_positive: bool,
}

impl TriageSignals {
    pub fn gather(sentence: &str, sentiment: &Sentiment) -> Self {
        let lower = sentence.to_lowercase();
        let is_hidden = contains_any(&lower, HIDDEN_TERMS)
            || (sentence.len() < HIDDEN_SHORT_SENTENCE_BYTES
                && contains_any(&lower, FOOTNOTE_MARKERS));
        Self {
            is_pro: contains_any(&lower, PRO_TERMS),
            is_con: contains_any(&lower, CON_TERMS),
            is_hidden,
            sentiment_positive: sentiment.label == SentimentLabel::Positive,
        }
    }
}

fn contains_any(lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| lower.contains(t))
}

/// Ordered triage rules; the first satisfied rule wins. Negative
/// sentiment outranks the hidden-detail signal, so a negative
/// fine-print sentence lands in cons, never in hidden details.
pub fn apply_rules(signals: TriageSignals) -> TriageLabel {
    if signals.is_pro && signals.sentiment_positive {
        TriageLabel::Pro
    } else if signals.is_con || !signals.sentiment_positive {
        TriageLabel::Con
    } else if signals.is_hidden {
        TriageLabel::HiddenDetail
    } else {
        TriageLabel::Neutral
    }
}

/// Classify one sentence given its sentiment.
pub fn classify_sentence(sentence: &str, sentiment: &Sentiment) -> TriageLabel {
    apply_rules(TriageSignals::gather(sentence, sentiment))
}

/// Triage every qualifying sentence of `text` into pros, cons, and
/// hidden details. Output lists are deduplicated, first-seen order
/// preserved; neutral sentences are counted and dropped.
pub fn triage(
    text: &str,
    segmenter: &dyn SentenceSegmenter,
    classifier: &dyn SentimentClassifier,
) -> TriageResult {
    let mut result = TriageResult::default();
    let mut neutral = 0usize;

    for sentence in segmenter.segment(text) {
        if sentence.split_whitespace().count() < MIN_TRIAGE_WORDS {
            continue;
        }

        let sentiment = classifier.classify(&sentence);
        match classify_sentence(&sentence, &sentiment) {
            TriageLabel::Pro => result.pros.push(sentence.trim().to_string()),
            TriageLabel::Con => result.cons.push(sentence.trim().to_string()),
            TriageLabel::HiddenDetail => result.hidden_details.push(sentence.trim().to_string()),
            TriageLabel::Neutral => neutral += 1,
        }
    }

    dedup_preserving_order(&mut result.pros);
    dedup_preserving_order(&mut result.cons);
    dedup_preserving_order(&mut result.hidden_details);

    tracing::debug!(
        pros = result.pros.len(),
        cons = result.cons.len(),
        hidden = result.hidden_details.len(),
        neutral,
        "Triage complete, neutral sentences discarded"
    );

    result
}
