//! Lexical preprocessor for free-text answers.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tokens shorter than this many characters are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Function words carrying no classification signal.
///
/// Inputs are Russian free text from the questionnaire UI; words shorter
/// than [`MIN_TOKEN_CHARS`] never reach this set.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "как", "что", "это", "или", "для", "когда", "очень", "чтобы", "если", "меня", "мне",
        "мой", "моя", "мои", "все", "всё", "еще", "ещё", "тоже", "только", "просто", "быть",
        "есть", "свой", "свои", "них", "при", "без", "где", "там", "тут",
    ]
    .into_iter()
    .collect()
});

/// Normalizes free text into a sequence of comparable tokens.
///
/// Lowercases, splits on anything non-alphanumeric, drops stop words and
/// tokens shorter than three characters. Pure and deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_owned)
        .collect()
}
