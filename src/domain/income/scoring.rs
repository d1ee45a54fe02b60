//! Accumulator scoring over the income questionnaire.

use tracing::debug;

use crate::domain::profile::ScoreDistribution;

use super::{IncomeAnswers, IncomeDirection};

/// Weight for a firm "да" answer.
const YES_WEIGHT: f64 = 2.0;

/// Weight for a hedged "возможно" answer.
const MAYBE_WEIGHT: f64 = 1.0;

/// Weight for readiness/time range phrases.
const RANGE_WEIGHT: f64 = 1.0;

/// Scores the five direction accumulators from the raw answers.
///
/// Each yes/maybe question feeds one direction; the readiness and weekly
/// time phrases nudge the directions whose ramp-up matches them. All
/// weights are fixed policy, not tuning knobs.
pub fn calc_income_scores(answers: &IncomeAnswers) -> ScoreDistribution<IncomeDirection> {
    let mut scores = ScoreDistribution::from_keys(&IncomeDirection::ALL);

    let yes_maybe = [
        (&answers.enjoys_physical, IncomeDirection::Body),
        (&answers.enjoys_selling, IncomeDirection::Sales),
        (&answers.comfortable_online, IncomeDirection::Online),
        (&answers.has_creative_hobby, IncomeDirection::Creative),
        (&answers.patient_listener, IncomeDirection::Soft),
    ];
    for (answer, direction) in yes_maybe {
        if answer.contains("да") {
            scores.add(direction, YES_WEIGHT);
        } else if answer.contains("возможно") {
            scores.add(direction, MAYBE_WEIGHT);
        }
    }

    // Quick-start directions benefit from immediate readiness; the ones
    // needing an audience or a portfolio benefit from a preparation phase.
    if answers.start_readiness.contains("сразу") {
        scores.add(IncomeDirection::Body, RANGE_WEIGHT);
        scores.add(IncomeDirection::Sales, RANGE_WEIGHT);
    }
    if answers.start_readiness.contains("подготовк") {
        scores.add(IncomeDirection::Online, RANGE_WEIGHT);
        scores.add(IncomeDirection::Creative, RANGE_WEIGHT);
    }

    if answers.time_available.contains("до 5") {
        scores.add(IncomeDirection::Soft, RANGE_WEIGHT);
    }
    if answers.time_available.contains("больше 10") {
        scores.add(IncomeDirection::Online, RANGE_WEIGHT);
        scores.add(IncomeDirection::Body, RANGE_WEIGHT);
    }

    debug!(total = scores.total(), "scored income answers");
    scores
}

/// Picks the winning direction: arg-max over the accumulators, with the
/// declared priority order breaking equal scores.
pub fn pick_income_direction(scores: &ScoreDistribution<IncomeDirection>) -> IncomeDirection {
    let mut best = IncomeDirection::ALL[0];
    let mut best_score = scores.get(best);
    for direction in IncomeDirection::ALL {
        let score = scores.get(direction);
        if score > best_score {
            best = direction;
            best_score = score;
        }
    }
    best
}
