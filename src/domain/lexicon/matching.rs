//! Fuzzy prefix matching between tokens and keyword stems.

/// Character count a token is truncated to before the reverse prefix test.
///
/// This constant approximates stemming without a morphological analyzer and
/// is relied upon by every stored classification; it must not change.
pub const STEM_TRUNCATION_CHARS: usize = 5;

/// Tests whether a token matches a keyword stem.
///
/// A match holds when the token starts with the keyword, or when the
/// keyword starts with the token truncated to
/// [`STEM_TRUNCATION_CHARS`] characters. Truncation is measured in
/// characters, never bytes, because inputs are Cyrillic.
pub fn token_matches(token: &str, keyword: &str) -> bool {
    if token.starts_with(keyword) {
        return true;
    }
    let stem: String = token.chars().take(STEM_TRUNCATION_CHARS).collect();
    keyword.starts_with(&stem)
}
