//! Income-direction matching use case.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::foundation::{Timestamp, UserContext, UserId};
use crate::domain::income::{
    build_income_report, calc_income_scores, pick_income_direction, rank_income_offers,
    IncomeAnswers, IncomeDirection,
};
use crate::domain::profile::{classify_motivation, primary_motivation, Motivation, ScoreDistribution};
use crate::domain::report::Document;

/// Terminal snapshot of a completed income-matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSession {
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub answers: IncomeAnswers,
    pub scores: ScoreDistribution<IncomeDirection>,
    pub direction: IncomeDirection,
    pub primary_motivation: Motivation,
    /// Offer names in ranked order.
    pub offers: Vec<String>,
    pub report: Document,
}

/// Scores the questionnaire, picks the direction and ranks its offers.
///
/// The motivation statement reuses the profile classifier; with no
/// usable vocabulary the ranking falls back to the process driver.
pub fn run_income_match(
    ctx: &UserContext,
    answers: IncomeAnswers,
    motivation_text: &str,
) -> IncomeSession {
    let scores = calc_income_scores(&answers);
    let direction = pick_income_direction(&scores);

    let motivation_scores = classify_motivation(motivation_text);
    let primary = primary_motivation(&motivation_scores);

    let ranked = rank_income_offers(direction, primary);
    let report = build_income_report(direction, &scores, &ranked, primary);

    info!(
        user = %ctx.user_id,
        direction = direction.as_str(),
        "completed income match"
    );

    IncomeSession {
        user_id: ctx.user_id.clone(),
        created_at: Timestamp::now(),
        answers,
        scores,
        direction,
        primary_motivation: primary,
        offers: ranked.iter().map(|e| e.name.to_string()).collect(),
        report,
    }
}
