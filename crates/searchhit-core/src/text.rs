// crates/searchhit-core/src/text.rs

//! # Text Helpers
//!
//! Case folding for name comparison and Latin-1 transcoding for the `K:`
//! identifier probe.

/// Case-insensitive equality without allocating.
///
/// Accents are significant: `"Malmo"` and `"Malmö"` differ.
///
/// ```rust
/// use searchhit_core::text::equals_folded;
/// assert!(equals_folded("LUND", "lund"));
/// assert!(!equals_folded("Malmo", "MALMÖ"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same
/// value, so this cannot fail.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
