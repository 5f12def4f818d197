use std::sync::LazyLock;

use regex::Regex;

use super::types::ClauseCategory;

/// A clause term compiled for whole-word, case-insensitive matching.
struct ClausePattern {
    term: &'static str,
    regex: Regex,
}

/// One category's ordered term list. Term order is the tie-break: the
/// first matching term wins and scanning stops for that category.
struct ClauseRule {
    category: ClauseCategory,
    patterns: Vec<ClausePattern>,
}

static CLAUSE_RULES: LazyLock<Vec<ClauseRule>> = LazyLock::new(|| {
    vec![
        rule(
            ClauseCategory::Exclusions,
            &["exclusion", "not covered", "excluded", "except", "excluding"],
        ),
        rule(
            ClauseCategory::Limitations,
            &["limit", "maximum", "up to", "no more than", "ceiling"],
        ),
        rule(
            ClauseCategory::Requirements,
            &["must", "required", "shall", "need to", "obligation"],
        ),
        rule(
            ClauseCategory::Deadlines,
            &["within", "deadline", "by", "no later than", "time limit"],
        ),
        rule(
            ClauseCategory::Fees,
            &[
                "fee",
                "charge",
                "payment",
                "premium",
                "deductible",
                "copay",
                "coinsurance",
            ],
        ),
        rule(
            ClauseCategory::Coverage,
            &["cover", "coverage", "protect", "benefit", "reimburse", "pay for"],
        ),
        rule(
            ClauseCategory::Conditions,
            &["condition", "if", "when", "provided that", "subject to"],
        ),
    ]
});

fn rule(category: ClauseCategory, terms: &[&'static str]) -> ClauseRule {
    ClauseRule {
        category,
        patterns: terms
            .iter()
            .map(|term| ClausePattern {
                term,
                regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .expect("invalid clause term"),
            })
            .collect(),
    }
}

/// First term of `category` that matches `sentence`, in table order.
/// This is the explicit first-match-wins evaluator: once a term hits,
/// later terms in the same category are not consulted.
pub fn first_matching_term(category: ClauseCategory, sentence: &str) -> Option<&'static str> {
    CLAUSE_RULES
        .iter()
        .find(|r| r.category == category)
        .and_then(|r| {
            r.patterns
                .iter()
                .find(|p| p.regex.is_match(sentence))
                .map(|p| p.term)
        })
}

/// Every category whose term list matches `sentence`. Categories are
/// tested independently; one sentence can land in several.
pub fn matching_categories(sentence: &str) -> Vec<ClauseCategory> {
    CLAUSE_RULES
        .iter()
        .filter(|r| r.patterns.iter().any(|p| p.regex.is_match(sentence)))
        .map(|r| r.category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_terms_match() {
        for sentence in [
            "Cosmetic surgery is an exclusion under this plan.",
            "Hearing aids are not covered by the base policy.",
            "Injuries from racing are excluded from all benefits.",
            "All claims are honored except those filed late.",
            "The plan pays all costs excluding pre-existing conditions.",
        ] {
            assert!(
                matching_categories(sentence).contains(&ClauseCategory::Exclusions),
                "{sentence}"
            );
        }
    }

    #[test]
    fn fee_terms_match() {
        for sentence in [
            "A processing fee is added to late renewals.",
            "The monthly premium increases with age.",
            "A $1,500 deductible applies to hospital claims.",
            "Each visit carries a copay of forty dollars.",
        ] {
            assert!(
                matching_categories(sentence).contains(&ClauseCategory::Fees),
                "{sentence}"
            );
        }
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "Byzantine" must not match the deadline term "by".
        let sentence = "The Byzantine clause structure confuses readers.";
        assert!(!matching_categories(sentence).contains(&ClauseCategory::Deadlines));

        // "conditions" must not match the singular term "condition".
        let sentence = "Several conditions are listed there.";
        assert_eq!(
            first_matching_term(ClauseCategory::Conditions, sentence),
            None
        );
    }

    #[test]
    fn first_matching_term_follows_table_order() {
        // Matches both "exclusion" and "excluded"; "exclusion" is earlier.
        let sentence = "This exclusion means racing injuries are excluded.";
        assert_eq!(
            first_matching_term(ClauseCategory::Exclusions, sentence),
            Some("exclusion")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(matching_categories("PRE-APPROVAL IS REQUIRED FOR SURGERY.")
            .contains(&ClauseCategory::Requirements));
    }

    #[test]
    fn one_sentence_can_hit_multiple_categories() {
        let sentence = "Claims must be filed within 90 days or the payment is forfeited.";
        let categories = matching_categories(sentence);
        assert!(categories.contains(&ClauseCategory::Requirements)); // must
        assert!(categories.contains(&ClauseCategory::Deadlines)); // within
        assert!(categories.contains(&ClauseCategory::Fees)); // payment
    }

    #[test]
    fn phrase_terms_match_across_spaces() {
        assert!(matching_categories("Claims are honored provided that premiums are current.")
            .contains(&ClauseCategory::Conditions));
        assert!(matching_categories("Benefits are capped at no more than two visits.")
            .contains(&ClauseCategory::Limitations));
    }

    #[test]
    fn unrelated_sentence_matches_nothing() {
        assert!(matching_categories("The weather was pleasant that afternoon.").is_empty());
    }
}
