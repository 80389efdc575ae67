//! Sentence-aware truncation.
//!
//! All positions are grapheme indices, so a cut never lands inside a
//! user-perceived character.

use unicode_segmentation::UnicodeSegmentation;

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &[&str] = &["。", "！", "？", "．", "!", "?"];

/// The terminator counted by [`cap_sentences`].
const SENTENCE_UNIT: &str = "。";

const TERMINATOR_LOOKBACK: usize = 20;
const WHITESPACE_LOOKBACK: usize = 10;
const ELLIPSIS: &str = "...";

/// Options for [`truncate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Keep at most this many `。`-terminated sentences; zero means no cap.
    pub max_sentence_units: Option<usize>,
}

impl TruncateOptions {
    /// Cap the output at `units` sentences.
    pub fn sentences(units: usize) -> Self {
        Self {
            max_sentence_units: Some(units),
        }
    }
}

/// Keep text up to and including the `units`-th `。`.
///
/// # Examples
///
/// ```
/// use buzzcast_content::cap_sentences;
///
/// assert_eq!(cap_sentences("一。二。三。", 2), "一。二。");
/// assert_eq!(cap_sentences("一。二", 2), "一。二");
/// ```
pub fn cap_sentences(text: &str, units: usize) -> String {
    if units == 0 {
        return text.to_string();
    }

    let mut seen = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        if grapheme == SENTENCE_UNIT {
            seen += 1;
            if seen == units {
                return text[..offset + grapheme.len()].to_string();
            }
        }
    }
    text.to_string()
}

/// Fit `text` into `max_length` characters.
///
/// The sentence cap in `options` is applied first. Text that then fits is
/// returned unchanged. Otherwise the cut is, in order of preference:
/// 1. right after a terminator within the last 20 characters of the budget
/// 2. before whitespace within the last 10 characters of the budget
/// 3. a hard cut with `...`, or without it when the budget is under 3
///
/// The result never exceeds `max_length` characters.
///
/// # Examples
///
/// ```
/// use buzzcast_content::{TruncateOptions, truncate};
///
/// let text = "短い文。これは長い文で続くので途中で切りたい。さらに続く。";
/// assert_eq!(truncate(text, 18, &TruncateOptions::default()), "短い文。");
/// ```
pub fn truncate(text: &str, max_length: usize, options: &TruncateOptions) -> String {
    let capped = match options.max_sentence_units {
        Some(units) => cap_sentences(text, units),
        None => text.to_string(),
    };

    let graphemes: Vec<&str> = capped.graphemes(true).collect();
    if graphemes.len() <= max_length {
        return capped;
    }

    let terminator_window = max_length.saturating_sub(TERMINATOR_LOOKBACK)..max_length;
    if let Some(i) = terminator_window
        .rev()
        .find(|&i| SENTENCE_TERMINATORS.contains(&graphemes[i]))
    {
        return graphemes[..=i].concat();
    }

    let whitespace_window = max_length.saturating_sub(WHITESPACE_LOOKBACK)..max_length;
    if let Some(i) = whitespace_window
        .rev()
        .filter(|&i| i > 0)
        .find(|&i| graphemes[i].chars().all(char::is_whitespace))
    {
        return graphemes[..i].concat().trim_end().to_string();
    }

    if max_length < ELLIPSIS.len() {
        return graphemes[..max_length].concat();
    }
    format!("{}{}", graphemes[..max_length - ELLIPSIS.len()].concat(), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_zero_is_no_cap() {
        assert_eq!(cap_sentences("一。二。", 0), "一。二。");
    }

    #[test]
    fn test_terminator_at_last_index_is_kept() {
        // "あいう。" is exactly 4 characters; index 3 is inside the window
        assert_eq!(truncate("あいう。えお", 4, &TruncateOptions::default()), "あいう。");
    }

    #[test]
    fn test_whitespace_at_index_zero_is_not_a_cut_point() {
        assert_eq!(truncate(" abcdefgh", 6, &TruncateOptions::default()), " ab...");
    }
}
