//! Text normalization for keyword matching.

use unicode_normalization::UnicodeNormalization;

/// Fold `text` so keyword matching ignores width, case and punctuation style.
///
/// Applies NFKC, lowercases, and unifies quote, dash and wave-dash variants.
/// The katakana prolonged sound mark `ー` is left alone.
///
/// # Examples
///
/// ```
/// use buzzcast_scoring::normalize;
///
/// assert_eq!(normalize("ＣｈａｔＧＰＴ"), "chatgpt");
/// assert_eq!(normalize("“生成ＡＩ”"), "\"生成ai\"");
/// assert_eq!(normalize("１０〜２０％"), "10~20%");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .flat_map(char::to_lowercase)
        .map(unify_punctuation)
        .collect()
}

fn unify_punctuation(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => '"',
        '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
        '\u{301C}' | '\u{3030}' => '~',
        other => other,
    }
}
