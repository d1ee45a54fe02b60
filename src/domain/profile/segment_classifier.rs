//! Segment classifier for free-text activity descriptions.

use tracing::debug;

use crate::domain::lexicon::{token_matches, tokenize};

use super::{segment_keywords, ScoreDistribution, Segment};

/// Maps activity descriptions onto a normalized segment distribution.
///
/// Each description contributes weight 1, split evenly across every
/// segment it matches; descriptions matching nothing contribute nothing.
/// The accumulated distribution is normalized to sum to 1 unless no
/// description matched at all, in which case the raw zero vector is
/// preserved.
pub fn classify_segments(activities: &[String]) -> ScoreDistribution<Segment> {
    let mut scores = ScoreDistribution::from_keys(&Segment::ALL);

    for activity in activities {
        let tokens = tokenize(activity);
        let matched: Vec<Segment> = Segment::ALL
            .into_iter()
            .filter(|segment| {
                tokens.iter().any(|token| {
                    segment_keywords(*segment)
                        .iter()
                        .any(|keyword| token_matches(token, keyword))
                })
            })
            .collect();

        if matched.is_empty() {
            continue;
        }
        // Ties are shared, not broken: k matches each get 1/k credit.
        let credit = 1.0 / matched.len() as f64;
        for segment in &matched {
            scores.add(*segment, credit);
        }
        debug!(activity = %activity, matches = matched.len(), "scored activity");
    }

    scores.normalize();
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activities(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn single_match_gets_full_credit() {
        let scores = classify_segments(&activities(&["помогаю друзьям решать проблемы"]));
        assert_eq!(scores.get(Segment::HelpPeople), 1.0);
        assert_eq!(scores.nonzero_count(), 1);
    }

    #[test]
    fn multi_match_splits_credit_evenly() {
        // "преподаю" signals education, "рисую" creative: two segments in
        // one description share the single unit of weight.
        let scores = classify_segments(&activities(&["преподаю и рисую"]));
        // Only entry, so normalization rescales the halves back to halves.
        assert!((scores.get(Segment::Creative) - 0.5).abs() < f64::EPSILON);
        assert!((scores.get(Segment::Education) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn scores_accumulate_across_descriptions_and_normalize() {
        let scores = classify_segments(&activities(&[
            "помогаю друзьям решать проблемы",
            "анализирую данные в таблицах",
        ]));
        assert!((scores.total() - 1.0).abs() < 1e-9);
        assert!(scores.get(Segment::HelpPeople) > 0.0);
        assert!(scores.get(Segment::Analytics) > 0.0);
        assert_eq!(scores.get(Segment::Creative), 0.0);
    }

    #[test]
    fn unmatched_descriptions_contribute_nothing() {
        let scores = classify_segments(&activities(&[
            "анализирую данные",
            "зымзымзым абракадабра",
        ]));
        assert_eq!(scores.get(Segment::Analytics), 1.0);
    }

    #[test]
    fn no_evidence_leaves_zero_vector() {
        let scores = classify_segments(&activities(&["абракадабра"]));
        assert!(scores.is_zero());
        for (_, score) in scores.iter() {
            assert!(!score.is_nan());
        }
    }

    #[test]
    fn empty_input_leaves_zero_vector() {
        let scores = classify_segments(&[]);
        assert!(scores.is_zero());
    }
}
