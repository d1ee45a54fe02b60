//! Psychological profile report assembly.

use crate::domain::ranker::CatalogueEntry;
use crate::domain::report::Document;

use super::{assess_burnout, Motivation, RiskLevel, ScoreDistribution, Segment};

/// Assembles the profile report from the computed results bundle.
///
/// Section order is fixed; the score list appears only when the
/// classifier found evidence, the burnout callout appears always.
pub fn build_psych_report(
    segment: Segment,
    motivation: Motivation,
    profession: &CatalogueEntry,
    segment_scores: &ScoreDistribution<Segment>,
    motivation_scores: &ScoreDistribution<Motivation>,
) -> Document {
    let mut doc = Document::new();
    doc.heading(1, "Your psychological profile");

    let [first, second] = segment_scores.top2();
    doc.paragraph(format!(
        "Your strongest interest areas are {} and {}.",
        first.0.label().to_lowercase(),
        second.0.label().to_lowercase(),
    ));

    if !segment_scores.is_zero() {
        let items: Vec<String> = segment_scores
            .iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(key, score)| format!("{} — {}%", key.label(), (score * 100.0).round()))
            .collect();
        doc.bullets(items);
    }

    doc.divider();
    doc.heading(2, "What drives you");
    doc.paragraph(format!(
        "The answers point to {} as your main driver. Work that feeds it will hold your attention far longer than work that merely pays.",
        motivation.label().to_lowercase(),
    ));

    doc.heading(2, "Recommended direction");
    doc.paragraph(format!(
        "Within {}, the closest match to your motivation profile is: {}.",
        segment.label().to_lowercase(),
        profession.name,
    ));

    let risk = assess_burnout(profession.tags, motivation, motivation_scores, segment_scores);
    let burnout_text = match risk.level {
        RiskLevel::Low => "Burnout risk: low. Your interests and motivation pull in the same direction.",
        RiskLevel::Medium => "Burnout risk: medium. Parts of this direction run against your main driver; schedule regular check-ins with yourself.",
        RiskLevel::High => "Burnout risk: high. The chosen direction conflicts with what actually drives you; treat it as a short experiment, not a commitment.",
    };
    doc.callout(burnout_text);

    doc.paragraph(
        "A profile is a starting point, not a verdict. Re-run the assessment after any major change in what you spend your days on.",
    );
    doc
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
