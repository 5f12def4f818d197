/// Sentence segmentation capability.
pub trait SentenceSegmenter {
    /// Split `text` into an ordered list of sentence strings.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Rule-based segmenter: sentences end at `.` `!` `?` followed by a
/// plausible sentence start. Abbreviations, single initials, and decimal
/// numbers do not end sentences; paragraph breaks always do.
pub struct RuleSegmenter;

/// Tokens before a period that signal an abbreviation, not a boundary.
/// Lowercased, inner periods kept, trailing period stripped.
static ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "etc", "vs", "dr", "mr", "mrs", "ms", "inc", "ltd", "co",
    "corp", "dept", "approx", "jr", "sr", "st", "u.s",
];

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            // Blank line = paragraph break = sentence boundary.
            if c == '\n' {
                let mut j = i + 1;
                while j < chars.len() && (chars[j] == ' ' || chars[j] == '\t') {
                    j += 1;
                }
                if j < chars.len() && chars[j] == '\n' {
                    push_sentence(&mut sentences, &chars[start..i]);
                    start = j + 1;
                    i = j + 1;
                    continue;
                }
            }

            if matches!(c, '.' | '!' | '?') {
                // Closing quotes and brackets stay with the sentence.
                let mut end = i + 1;
                while end < chars.len()
                    && matches!(chars[end], ')' | ']' | '"' | '\'' | '\u{201D}' | '\u{2019}')
                {
                    end += 1;
                }
                if is_boundary(&chars, i, end) {
                    push_sentence(&mut sentences, &chars[start..end]);
                    start = end;
                    i = end;
                    continue;
                }
            }

            i += 1;
        }

        push_sentence(&mut sentences, &chars[start..]);
        sentences
    }
}

fn push_sentence(out: &mut Vec<String>, chars: &[char]) {
    let s: String = chars.iter().collect();
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

fn is_boundary(chars: &[char], ender: usize, end: usize) -> bool {
    if chars[ender] == '.' {
        // Decimal number ("3.5 percent") — digits on both sides.
        let prev_digit = ender > 0 && chars[ender - 1].is_ascii_digit();
        let next_digit = end < chars.len() && chars[end].is_ascii_digit();
        if prev_digit && next_digit {
            return false;
        }
        if is_abbreviation(chars, ender) {
            return false;
        }
    }

    // Look at what follows the ender (plus any closers).
    let mut j = end;
    let mut saw_space = false;
    while j < chars.len() && chars[j].is_whitespace() {
        saw_space = true;
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    if !saw_space {
        // Mid-token period ("U.S" inside "U.S.A")
        return false;
    }

    let next = chars[j];
    next.is_uppercase()
        || next.is_ascii_digit()
        || matches!(
            next,
            '$' | '(' | '"' | '\'' | '*' | '\u{2020}' | '\u{2022}' | '\u{201C}' | '\u{2018}'
        )
}

fn is_abbreviation(chars: &[char], ender: usize) -> bool {
    let mut s = ender;
    while s > 0 && (chars[s - 1].is_alphanumeric() || chars[s - 1] == '.') {
        s -= 1;
    }
    let token: String = chars[s..ender]
        .iter()
        .collect::<String>()
        .to_lowercase();
    if token.is_empty() {
        return false;
    }
    // A lone initial ("J. Smith")
    if token.chars().count() == 1 && token.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&token.as_str())
}
