//! Burnout risk composite index.

use serde::{Deserialize, Serialize};

use super::{Motivation, ScoreDistribution, Segment};

/// Top-2 segment gap below which the profile counts as ambiguous.
pub const SEGMENT_TIE_EPSILON: f64 = 0.05;

/// Penalty when the chosen profession's tags exclude the primary
/// motivation.
const MISMATCH_PENALTY: u8 = 2;

/// Penalty when money is the only detected motivation.
const MONEY_ONLY_PENALTY: u8 = 2;

/// Penalty for an ambiguous (near-tied) top segment.
const AMBIGUITY_PENALTY: u8 = 1;

/// Risk label derived from the accumulated penalty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps a penalty score to its label: <=1 low, <=3 medium, else high.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => RiskLevel::Low,
            2..=3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Result of the burnout assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnoutRisk {
    pub score: u8,
    pub level: RiskLevel,
}

/// Composes the burnout risk from three independent penalty rules.
///
/// The rules are additive, not mutually exclusive: a profession whose
/// tags exclude the primary motivation (+2), money as the sole detected
/// driver (+2), and a near-tied top segment pair (+1).
pub fn assess_burnout(
    profession_tags: &[Motivation],
    primary: Motivation,
    motivation_scores: &ScoreDistribution<Motivation>,
    segment_scores: &ScoreDistribution<Segment>,
) -> BurnoutRisk {
    let mut score = 0;

    if !profession_tags.contains(&primary) {
        score += MISMATCH_PENALTY;
    }

    let money_only = motivation_scores.nonzero_count() == 1
        && motivation_scores.get(Motivation::Money) > 0.0;
    if money_only {
        score += MONEY_ONLY_PENALTY;
    }

    let [first, second] = segment_scores.top2();
    if (first.1 - second.1).abs() < SEGMENT_TIE_EPSILON {
        score += AMBIGUITY_PENALTY;
    }

    BurnoutRisk {
        score,
        level: RiskLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motivation_scores(pairs: &[(Motivation, f64)]) -> ScoreDistribution<Motivation> {
        let mut scores = ScoreDistribution::from_keys(&Motivation::ALL);
        for (key, weight) in pairs {
            scores.add(*key, *weight);
        }
        scores
    }

    fn segment_scores(pairs: &[(Segment, f64)]) -> ScoreDistribution<Segment> {
        let mut scores = ScoreDistribution::from_keys(&Segment::ALL);
        for (key, weight) in pairs {
            scores.add(*key, *weight);
        }
        scores
    }

    #[test]
    fn aligned_profile_scores_zero() {
        let risk = assess_burnout(
            &[Motivation::Process, Motivation::Freedom],
            Motivation::Process,
            &motivation_scores(&[(Motivation::Process, 2.0), (Motivation::Meaning, 1.0)]),
            &segment_scores(&[(Segment::Creative, 0.8), (Segment::Analytics, 0.2)]),
        );
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn tag_mismatch_adds_two() {
        let risk = assess_burnout(
            &[Motivation::Money],
            Motivation::Meaning,
            &motivation_scores(&[(Motivation::Meaning, 2.0), (Motivation::Process, 1.0)]),
            &segment_scores(&[(Segment::HelpPeople, 0.9), (Segment::Research, 0.1)]),
        );
        assert_eq!(risk.score, 2);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn money_only_motivation_adds_two() {
        let risk = assess_burnout(
            &[Motivation::Money],
            Motivation::Money,
            &motivation_scores(&[(Motivation::Money, 3.0)]),
            &segment_scores(&[(Segment::Sales, 0.7), (Segment::Tech, 0.3)]),
        );
        assert_eq!(risk.score, 2);
    }

    #[test]
    fn money_among_others_is_not_penalized() {
        let risk = assess_burnout(
            &[Motivation::Money],
            Motivation::Money,
            &motivation_scores(&[(Motivation::Money, 3.0), (Motivation::Freedom, 1.0)]),
            &segment_scores(&[(Segment::Sales, 0.7), (Segment::Tech, 0.3)]),
        );
        assert_eq!(risk.score, 0);
    }

    #[test]
    fn near_tied_top_segments_add_one() {
        let risk = assess_burnout(
            &[Motivation::Process],
            Motivation::Process,
            &motivation_scores(&[(Motivation::Process, 1.0), (Motivation::Meaning, 1.0)]),
            &segment_scores(&[(Segment::Creative, 0.51), (Segment::Analytics, 0.49)]),
        );
        assert_eq!(risk.score, 1);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn exact_epsilon_gap_is_not_ambiguous() {
        let risk = assess_burnout(
            &[Motivation::Process],
            Motivation::Process,
            &motivation_scores(&[(Motivation::Process, 1.0), (Motivation::Meaning, 1.0)]),
            &segment_scores(&[(Segment::Creative, 0.4), (Segment::Analytics, 0.35)]),
        );
        assert_eq!(risk.score, 0);
    }

    #[test]
    fn all_rules_accumulate_to_high() {
        // Mismatched tags (+2), money-only motivation (+2) and a tied
        // top segment pair (+1): 5 total.
        let risk = assess_burnout(
            &[Motivation::Meaning],
            Motivation::Money,
            &motivation_scores(&[(Motivation::Money, 2.0)]),
            &segment_scores(&[(Segment::Creative, 0.35), (Segment::Analytics, 0.33)]),
        );
        assert_eq!(risk.score, 5);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn risk_level_thresholds_are_exact() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::High);
    }
}
