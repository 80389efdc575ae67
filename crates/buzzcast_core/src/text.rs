//! Character counting shared by truncation and validation.

use unicode_segmentation::UnicodeSegmentation;

/// Length of `text` in user-perceived characters (extended grapheme clusters).
///
/// # Examples
///
/// ```
/// use buzzcast_core::text_length;
///
/// assert_eq!(text_length("円安"), 2);
/// assert_eq!(text_length("👨‍👩‍👧"), 1);
/// ```
pub fn text_length(text: &str) -> usize {
    text.graphemes(true).count()
}
