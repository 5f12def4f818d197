use serde::{Deserialize, Serialize};

/// Binary sentiment label. The pipeline consumes only the label; the
/// score travels along for logging and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f32,
}

/// Sentiment classification capability.
pub trait SentimentClassifier {
    fn classify(&self, sentence: &str) -> Sentiment;
}

/// Lexicon-based classifier: counts word-boundary hits against positive
/// and negative term lists, with a short negation window that flips the
/// polarity of the following hit. Sentences with no signal (or a tie)
/// read as positive, which keeps neutral policy boilerplate out of the
/// cons bucket.
pub struct LexiconSentiment;

static POSITIVE_TERMS: &[&str] = &[
    "advantage",
    "benefit",
    "benefits",
    "bonus",
    "cashless",
    "complimentary",
    "comprehensive",
    "covered",
    "covers",
    "discount",
    "easy",
    "flexible",
    "free",
    "generous",
    "guaranteed",
    "included",
    "includes",
    "protection",
    "protects",
    "renewable",
    "reward",
    "rewards",
    "support",
    "unlimited",
    "waiver",
];

static NEGATIVE_TERMS: &[&str] = &[
    "burden",
    "cancellation",
    "cancelled",
    "costly",
    "delay",
    "delays",
    "denial",
    "denied",
    "dispute",
    "excluded",
    "exclusion",
    "exclusions",
    "expensive",
    "fail",
    "fails",
    "failure",
    "forfeit",
    "forfeited",
    "lapse",
    "liable",
    "limitation",
    "limitations",
    "limited",
    "loss",
    "losses",
    "penalties",
    "penalty",
    "rejected",
    "rejection",
    "restricted",
    "restriction",
    "restrictions",
    "surcharge",
    "terminated",
    "termination",
    "void",
];

static NEGATORS: &[&str] = &["not", "no", "never", "without", "cannot"];

/// How many tokens back a negator still flips a sentiment hit.
const NEGATION_WINDOW: usize = 2;

impl SentimentClassifier for LexiconSentiment {
    fn classify(&self, sentence: &str) -> Sentiment {
        let tokens: Vec<String> = sentence
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let mut score: i32 = 0;
        let mut neg_hits: u32 = 0;
        let mut hits: u32 = 0;

        for (i, token) in tokens.iter().enumerate() {
            let polarity = if POSITIVE_TERMS.contains(&token.as_str()) {
                1
            } else if NEGATIVE_TERMS.contains(&token.as_str()) {
                -1
            } else {
                continue;
            };

            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));

            let contribution = if negated { -polarity } else { polarity };
            if contribution < 0 {
                neg_hits += 1;
            }
            score += contribution;
            hits += 1;
        }

        // Ties with any negative evidence read negative; only a sentence
        // with no signal at all defaults to positive.
        let label = if score < 0 || (score == 0 && neg_hits > 0) {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        let confidence = if hits == 0 {
            0.5
        } else {
            0.5 + 0.5 * (score.unsigned_abs() as f32 / hits as f32)
        };

        Sentiment {
            label,
            score: confidence,
        }
    }
}
