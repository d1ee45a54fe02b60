//! Motivation classifier for a single free-text statement.

use tracing::debug;

use crate::domain::lexicon::{token_matches, tokenize};

use super::{motivation_keywords, Motivation, ScoreDistribution};

/// Maps a motivation statement onto raw driver scores.
///
/// Credit is additive: every token matching a driver's keyword list adds
/// +1 to that driver. The distribution is intentionally left
/// unnormalized.
pub fn classify_motivation(text: &str) -> ScoreDistribution<Motivation> {
    let mut scores = ScoreDistribution::from_keys(&Motivation::ALL);

    for token in tokenize(text) {
        for motivation in Motivation::ALL {
            let hit = motivation_keywords(motivation)
                .iter()
                .any(|keyword| token_matches(&token, keyword));
            if hit {
                scores.add(motivation, 1.0);
            }
        }
    }

    debug!(total = scores.total(), "scored motivation statement");
    scores
}

/// Returns the dominant motivation driver.
///
/// Arg-max over catalogue order, first declared wins ties. When no
/// lexical evidence was found the declared fallback
/// [`Motivation::FALLBACK`] is returned; vocabulary outside the keyword
/// tables silently lands there.
pub fn primary_motivation(scores: &ScoreDistribution<Motivation>) -> Motivation {
    let mut best = Motivation::ALL[0];
    let mut best_score = scores.get(best);
    for motivation in Motivation::ALL {
        let score = scores.get(motivation);
        if score > best_score {
            best = motivation;
            best_score = score;
        }
    }

    if best_score == 0.0 {
        return Motivation::FALLBACK;
    }
    best
}
