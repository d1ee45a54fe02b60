//! Income-direction report assembly.

use crate::domain::profile::{Motivation, ScoreDistribution};
use crate::domain::ranker::CatalogueEntry;
use crate::domain::report::Document;

use super::IncomeDirection;

/// Assembles the income-match report.
///
/// Fixed section order: heading, chosen direction, score breakdown,
/// ranked offers, next step. The score breakdown appears only when at
/// least one accumulator fired.
pub fn build_income_report(
    direction: IncomeDirection,
    scores: &ScoreDistribution<IncomeDirection>,
    offers: &[CatalogueEntry],
    primary: Motivation,
) -> Document {
    let mut doc = Document::new();
    doc.heading(1, "Your income direction");

    doc.paragraph(format!(
        "Based on your answers, the best-fitting direction is {}.",
        direction.label().to_lowercase(),
    ));

    if !scores.is_zero() {
        let items: Vec<String> = scores
            .iter()
            .map(|(key, score)| format!("{} — {} points", key.label(), score))
            .collect();
        doc.bullets(items);
    }

    doc.divider();
    doc.heading(2, "Where to start");
    doc.paragraph(format!(
        "Ordered by fit with your main driver ({}):",
        primary.label().to_lowercase(),
    ));
    doc.bullets(offers.iter().map(|offer| offer.name.to_string()).collect());

    doc.callout(
        "Pick the first option you could offer to a real person within two weeks. Momentum beats perfect positioning.",
    );
    doc
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
