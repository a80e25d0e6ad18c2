//! Text normalization and tokenization shared by index build and query.
//!
//! Both sides must go through the same functions. If the index folds "Café"
//! to "cafe" and the query doesn't, the exact tier never fires.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: strip diacritics and lowercase.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
///
/// Lowercasing runs first: "İ" lowercases to "i" plus U+0307, and the mark
/// has to be stripped along with the rest or it splits the token.
///
/// Without the `unicode-normalization` feature this only lowercases.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split normalized text into search tokens.
///
/// Tokens are maximal runs of alphanumeric characters, so punctuation,
/// markup and separators like `#`, `,` or `-` never end up in the vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
