/// Sanitize extracted text before passing downstream.
/// Strips control characters and normalizes lines while keeping the
/// punctuation the analysis passes rely on: currency symbols, percent
/// signs, and the footnote markers that flag fine print.
pub fn sanitize_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '"'
                        | '!'
                        | '?'
                        | '<'
                        | '>'
                        | '_'
                        // Currency and rate symbols in benefit tables
                        | '$'
                        | '%'
                        | '€'
                        | '£'
                        // Footnote markers used by the fine-print heuristic
                        | '*'
                        | '†'
                        | '•'
                        | '\u{2013}' // En-dash –
                        | '\u{2014}' // Em-dash —
                        | '\u{2018}'
                        | '\u{2019}'
                        | '\u{201C}'
                        | '\u{201D}'
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
