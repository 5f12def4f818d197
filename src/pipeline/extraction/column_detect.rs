// Whitespace-based column handling for PDF text. Benefit schedules are
// often laid out in two columns, and text-layer extraction interleaves
// them; when a consistent gutter is found, the page is reassembled to
// read the left column first, then the right.

/// Minimum width of a whitespace run to count as a gutter (characters).
const MIN_GUTTER_WIDTH: usize = 6;

/// Share of lines that must agree on a gutter position.
const GUTTER_LINE_RATIO: f64 = 0.50;

/// Allowed drift of the gutter position across lines (characters).
const GUTTER_TOLERANCE: usize = 4;

/// Pages shorter than this are left alone.
const MIN_LINES_FOR_DETECTION: usize = 4;

/// Detect a two-column layout and reorder the text left-column-first.
/// Returns the input unchanged when no consistent gutter exists.
pub fn reorder_columns(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < MIN_LINES_FOR_DETECTION {
        return text.to_string();
    }

    let positions: Vec<usize> = lines.iter().filter_map(|l| line_gutter(l)).collect();
    let gutter = match dominant_gutter(&positions, lines.len()) {
        Some(pos) => pos,
        None => return text.to_string(),
    };

    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in &lines {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= gutter {
            left.push(line.trim_end().to_string());
            continue;
        }
        let left_part: String = chars[..gutter].iter().collect();
        let right_part: String = chars[gutter..].iter().collect();
        let left_part = left_part.trim_end();
        let right_part = right_part.trim_start();
        if !left_part.is_empty() {
            left.push(left_part.to_string());
        }
        if !right_part.is_empty() {
            right.push(right_part.to_string());
        }
    }

    left.extend(right);
    left.join("\n")
}

/// Midpoint of the first whitespace run of MIN_GUTTER_WIDTH+ characters
/// with non-space text on both sides, or None.
fn line_gutter(line: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != ' ' {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i] == ' ' {
            i += 1;
        }
        let width = i - start;
        if width >= MIN_GUTTER_WIDTH {
            let has_left = chars[..start].iter().any(|c| !c.is_whitespace());
            let has_right = chars[i..].iter().any(|c| !c.is_whitespace());
            if has_left && has_right {
                return Some(start + width / 2);
            }
        }
    }
    None
}

/// Pick the gutter position most lines agree on, within tolerance.
fn dominant_gutter(positions: &[usize], line_count: usize) -> Option<usize> {
    if positions.is_empty() {
        return None;
    }

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    let mut best_start = 0;
    let mut best_len = 0;
    let mut start = 0;
    for end in 0..sorted.len() {
        while sorted[end] - sorted[start] > 2 * GUTTER_TOLERANCE {
            start += 1;
        }
        let len = end - start + 1;
        if len > best_len {
            best_len = len;
            best_start = start;
        }
    }

    let ratio = best_len as f64 / line_count as f64;
    if ratio < GUTTER_LINE_RATIO {
        return None;
    }
    // Median of the agreeing cluster
    Some(sorted[best_start + best_len / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_page_reads_left_first() {
        let text = "Covered services        Excluded services\n\
                    Hospital stays          Cosmetic surgery\n\
                    Ambulance transport     Dental implants\n\
                    Lab diagnostics         Experimental drugs";
        let out = reorder_columns(text);
        let hospital = out.find("Hospital stays").unwrap();
        let cosmetic = out.find("Cosmetic surgery").unwrap();
        assert!(
            hospital < cosmetic,
            "left column should come before right: {out}"
        );
        // Everything survives the reorder
        for term in ["Ambulance", "Dental implants", "Lab diagnostics"] {
            assert!(out.contains(term), "missing {term}: {out}");
        }
    }

    #[test]
    fn single_column_text_unchanged() {
        let text = "This policy covers hospital stays.\n\
                    The deductible is $1,500 per year.\n\
                    Claims must be filed within 90 days.\n\
                    Pre-existing conditions are excluded.";
        assert_eq!(reorder_columns(text), text);
    }

    #[test]
    fn short_pages_left_alone() {
        let text = "A        B\nC        D";
        assert_eq!(reorder_columns(text), text);
    }

    #[test]
    fn inconsistent_gutters_left_alone() {
        let text = "one two three four five\n\
                    a          b\n\
                    longer line with no gap at all here\n\
                    another plain line of policy text\n\
                    and a final plain line";
        assert_eq!(reorder_columns(text), text);
    }
}
