//! Plan document formatting.

use crate::domain::report::Document;

use super::{FinalPlan, StrategyTier};

/// Formats a built plan as a narrative document.
///
/// Fixed order: heading, strategy summary, gap note, the full schedule,
/// then flag-dependent callouts.
pub fn format_plan_as_document(plan: &FinalPlan) -> Document {
    let mut doc = Document::new();
    doc.heading(1, format!("Three-month plan: {}", plan.direction.label()));

    let pace = match plan.strategy {
        StrategyTier::Intensive => "an intensive pace with daily commitments",
        StrategyTier::Balanced => "a balanced pace with steady weekly work",
        StrategyTier::Soft => "a soft pace that protects your energy",
    };
    doc.paragraph(format!(
        "Readiness {}/10 puts you on the {} strategy — {}.",
        plan.readiness,
        plan.strategy.label(),
        pace,
    ));
    doc.paragraph(format!(
        "Income gap to close: {}% of your target.",
        plan.gap_percent.round(),
    ));

    for month in &plan.months {
        doc.divider();
        doc.heading(2, month.title.clone());
        for week in &month.weeks {
            doc.heading(3, week.title.clone());
            doc.bullets(week.tasks.clone());
        }
    }

    if plan.low_time {
        doc.callout(
            "Schedule thinned for a tight week: the essential tasks stay, the rest can wait.",
        );
    }
    if plan.wide_gap {
        doc.callout(
            "The gap to your target is wide — months 2 and 3 include active client search sprints.",
        );
    }
    if plan.scale_up {
        doc.callout(
            "You are close to your target — months 2 and 3 shift toward raising rates and scaling up.",
        );
    }
    if plan.accelerated {
        doc.callout("Your weekly hours unlock the accelerated scaling block in month 3.");
    }

    doc
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
