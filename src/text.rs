//! Text normalization.

use unicode_normalization::UnicodeNormalization;

/// Strip accents and keep only ASCII letters, digits and whitespace.
///
/// Accented letters are decomposed (NFD) so the base letter survives while
/// the combining mark is dropped: `é` becomes `e`. Every other character,
/// ASCII punctuation included, is dropped.
pub fn replace_special_chars(text: &str) -> String {
    // `is_ascii_whitespace` leaves out vertical tab
    text.nfd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || *c == '\u{0B}')
        .collect()
}
