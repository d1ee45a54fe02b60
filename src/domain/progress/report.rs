//! Progress comparison report assembly.

use crate::domain::report::Document;
use crate::ports::random::{pick_index, RandomSource};

use super::{compute_deltas, overall_trend, MetricDef, ProgressEntry, TrendDirection};

/// Historical entries below which the closing line is chosen by index.
const RANDOM_CLOSING_THRESHOLD: usize = 3;

/// Closing lines for the first three check-ins, indexed by history size.
const EARLY_CLOSINGS: [&str; 3] = [
    "First point on the chart. Everything from here is comparison material.",
    "Two check-ins in — the picture is starting to form.",
    "Three check-ins make a trend. Keep the rhythm.",
];

/// Closing lines drawn at random once the habit is established.
const LATER_CLOSINGS: [&str; 2] = [
    "Consistency is doing its quiet work. See you at the next check-in.",
    "Numbers move slowly, but they move. Keep logging.",
];

/// Assembles the progress comparison document.
///
/// With no previous entry the report is a baseline snapshot. Otherwise
/// each metric's change is listed in template order and the overall
/// trend narrated. The closing line is index-based while history is
/// short and uniformly random between two options afterwards — the one
/// place this report touches the random source.
pub fn build_progress_comparison(
    current: &ProgressEntry,
    previous: Option<&ProgressEntry>,
    template: &[MetricDef],
    historical_count: usize,
    rng: &mut dyn RandomSource,
) -> Document {
    let mut doc = Document::new();
    doc.heading(1, format!("Progress check-in — {}", current.date.date_label()));

    match previous {
        None => {
            doc.paragraph(
                "This is your baseline. Future check-ins will be compared against it.",
            );
            let items: Vec<String> = template
                .iter()
                .filter_map(|metric| {
                    current
                        .value(&metric.key)
                        .map(|v| format!("{}: {}", metric.label, v))
                })
                .collect();
            doc.bullets(items);
        }
        Some(previous) => {
            let deltas = compute_deltas(current, previous, template);
            let items: Vec<String> = deltas
                .iter()
                .map(|d| {
                    format!(
                        "{}: {} → {} ({})",
                        d.label,
                        d.previous,
                        d.current,
                        d.bucket.label()
                    )
                })
                .collect();
            doc.bullets(items);

            let trend_text = match overall_trend(&deltas) {
                TrendDirection::Positive => {
                    "Overall the week moved upward. Whatever you changed — it is working."
                }
                TrendDirection::Stable => {
                    "Overall the picture is stable. Plateaus are part of every climb."
                }
                TrendDirection::Negative => {
                    "Overall the numbers dipped. Worth a look at what drained the week."
                }
            };
            doc.paragraph(trend_text);
        }
    }

    if !current.main_focus.is_empty() {
        doc.paragraph(format!("Focus for the period: {}.", current.main_focus));
    }

    doc.divider();
    let closing = if historical_count < RANDOM_CLOSING_THRESHOLD {
        EARLY_CLOSINGS[historical_count]
    } else {
        LATER_CLOSINGS[pick_index(rng, LATER_CLOSINGS.len())]
    };
    doc.paragraph(closing);

    doc
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
