//! Psychological profile use case.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::foundation::{Timestamp, UserContext, UserId};
use crate::domain::profile::{
    assess_burnout, build_psych_report, classify_motivation, classify_segments,
    primary_motivation, rank_professions, BurnoutRisk, Motivation, ScoreDistribution, Segment,
};
use crate::domain::report::Document;

/// Terminal snapshot of a completed profile run.
///
/// Stored for later display and never recomputed from stored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychResult {
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub segment_scores: ScoreDistribution<Segment>,
    pub motivation_scores: ScoreDistribution<Motivation>,
    pub top_segments: [Segment; 2],
    pub primary_motivation: Motivation,
    /// Profession names in ranked order.
    pub ranked_professions: Vec<String>,
    pub selected_profession: String,
    pub burnout: BurnoutRisk,
    pub report: Document,
}

/// Runs the full profile pipeline over the questionnaire answers.
///
/// The recommended profession is the head of the ranking for the
/// dominant segment.
pub fn run_psych_assessment(
    ctx: &UserContext,
    activities: &[String],
    motivation_text: &str,
) -> PsychResult {
    let segment_scores = classify_segments(activities);
    let [top, second] = segment_scores.top2();

    let motivation_scores = classify_motivation(motivation_text);
    let primary = primary_motivation(&motivation_scores);

    let ranked = rank_professions(top.0, primary);
    let selected = ranked[0];

    let report = build_psych_report(top.0, primary, &selected, &segment_scores, &motivation_scores);
    let burnout = assess_burnout(selected.tags, primary, &motivation_scores, &segment_scores);

    info!(
        user = %ctx.user_id,
        segment = top.0.as_str(),
        motivation = primary.as_str(),
        "completed psych assessment"
    );

    PsychResult {
        user_id: ctx.user_id.clone(),
        created_at: Timestamp::now(),
        segment_scores,
        motivation_scores,
        top_segments: [top.0, second.0],
        primary_motivation: primary,
        ranked_professions: ranked.iter().map(|e| e.name.to_string()).collect(),
        selected_profession: selected.name.to_string(),
        burnout,
        report,
    }
}
