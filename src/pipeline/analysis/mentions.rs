use std::sync::LazyLock;

use regex::Regex;

use super::types::Mention;

/// Currency amounts: `$`-prefixed, or `dollars`/`USD`-suffixed, with
/// optional thousands separators and decimals.
static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\d+(?:,\d+)*(?:\.\d+)?|\d+(?:,\d+)*(?:\.\d+)?\s?(?:dollars|USD)")
        .expect("invalid money pattern")
});

/// Percentage expressions: `NN%` or `NN percent`.
static PERCENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:\.\d+)?%|\d+(?:\.\d+)?\spercent").expect("invalid percent pattern")
});

/// All currency amounts in `sentence`, each paired with the sentence as
/// context. Duplicates are kept deliberately: two `$500` mentions are
/// two occurrences.
pub fn monetary_mentions(sentence: &str) -> Vec<Mention> {
    MONEY_PATTERN
        .find_iter(sentence)
        .map(|m| Mention::new(m.as_str(), sentence))
        .collect()
}

/// All percentage expressions in `sentence`, same contract as
/// `monetary_mentions`.
pub fn percentage_mentions(sentence: &str) -> Vec<Mention> {
    PERCENT_PATTERN
        .find_iter(sentence)
        .map(|m| Mention::new(m.as_str(), sentence))
        .collect()
}
