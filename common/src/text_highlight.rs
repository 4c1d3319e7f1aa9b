//! Utilities for highlighting search matches in result text.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

impl HighlightTextSpan {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), is_highlighted: false, index: 0 }
    }
}

/// Splits `text` into spans, marking every case-insensitive occurrence of
/// `needle`. Highlighted spans are numbered from 0 in reading order.
///
/// Text whose lowercase form changes byte length is returned as one plain
/// span, since match offsets could not be mapped back onto it.
pub fn highlight_matches(text: &str, needle: &str) -> Vec<HighlightTextSpan> {
    if text.is_empty() {
        return vec![];
    }
    let lower_text = text.to_lowercase();
    let lower_needle = needle.to_lowercase();
    if lower_needle.is_empty() || lower_text.len() != text.len() {
        return vec![HighlightTextSpan::plain(text)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut index = 0;
    for (start, _) in lower_text.match_indices(lower_needle.as_str()) {
        let end = start + lower_needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        if start > cursor {
            spans.push(HighlightTextSpan::plain(&text[cursor..start]));
        }
        spans.push(HighlightTextSpan { text: text[start..end].to_string(), is_highlighted: true, index });
        index += 1;
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(HighlightTextSpan::plain(&text[cursor..]));
    }
    spans
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(spans: &[HighlightTextSpan]) -> String {
        spans.iter().map(|s| if s.is_highlighted { format!("[{}]", s.text) } else { s.text.clone() }).collect()
    }

    #[test]
    fn test_marks_every_occurrence_case_insensitively() {
        let spans = highlight_matches("Robot Lab: robots for everyone", "ROBOT");
        assert_eq!(render(&spans), "[Robot] Lab: [robot]s for everyone");
        let indexes = spans.iter().filter(|s| s.is_highlighted).map(|s| s.index).collect::<Vec<_>>();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn test_no_needle_or_no_match_is_one_plain_span() {
        assert_eq!(render(&highlight_matches("Quantum Seminar", "")), "Quantum Seminar");
        assert_eq!(highlight_matches("Quantum Seminar", "zzz").len(), 1);
        assert!(highlight_matches("", "x").is_empty());
    }

    #[test]
    fn test_multibyte_text_keeps_offsets() {
        assert_eq!(render(&highlight_matches("Café Ünïcode talk", "talk")), "Café Ünïcode [talk]");
    }
}
