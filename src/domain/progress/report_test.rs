use std::collections::HashMap;

use crate::domain::foundation::{ScaleValue, Timestamp};
use crate::domain::progress::{
    build_progress_comparison, default_metric_template, ProgressEntry,
};
use crate::domain::report::Block;
use crate::ports::random::FixedSequence;

fn entry(values: &[(&str, u8)]) -> ProgressEntry {
    let map: HashMap<String, ScaleValue> = values
        .iter()
        .map(|(k, v)| (k.to_string(), ScaleValue::new(*v)))
        .collect();
    ProgressEntry::new(
        Timestamp::from_unix_secs(1_705_276_800),
        map,
        "launch the first offer",
        "slow is smooth",
    )
}

fn full_entry(level: u8) -> ProgressEntry {
    entry(&[
        ("energy", level),
        ("clarity", level),
        ("confidence", level),
        ("discipline", level),
        ("satisfaction", level),
    ])
}

#[test]
fn first_entry_reports_baseline() {
    let mut rng = FixedSequence::new(vec![0.0]);
    let doc = build_progress_comparison(
        &full_entry(5),
        None,
        &default_metric_template(),
        0,
        &mut rng,
    );
    assert!(doc.mentions("baseline"));
    assert!(doc.mentions("First point on the chart"));
}

#[test]
fn comparison_lists_deltas_with_bucket_labels() {
    let previous = entry(&[("energy", 4), ("clarity", 5)]);
    let current = entry(&[("energy", 7), ("clarity", 5)]);
    let mut rng = FixedSequence::new(vec![0.0]);
    let doc = build_progress_comparison(
        &current,
        Some(&previous),
        &default_metric_template(),
        1,
        &mut rng,
    );
    assert!(doc.mentions("Energy: 4 → 7 (strong growth)"));
    assert!(doc.mentions("no change"));
}

#[test]
fn growth_majority_narrates_positive_trend() {
    let mut rng = FixedSequence::new(vec![0.0]);
    let doc = build_progress_comparison(
        &full_entry(8),
        Some(&full_entry(5)),
        &default_metric_template(),
        2,
        &mut rng,
    );
    assert!(doc.mentions("moved upward"));
}

#[test]
fn early_closings_are_index_based() {
    let mut rng = FixedSequence::new(vec![0.99]);
    let doc = build_progress_comparison(
        &full_entry(5),
        Some(&full_entry(5)),
        &default_metric_template(),
        2,
        &mut rng,
    );
    // Count 2 selects the third canned line regardless of the rng.
    assert!(doc.mentions("Three check-ins make a trend"));
}

#[test]
fn established_history_draws_closing_from_random_source() {
    let template = default_metric_template();

    let mut rng = FixedSequence::new(vec![0.0]);
    let doc = build_progress_comparison(&full_entry(5), Some(&full_entry(5)), &template, 3, &mut rng);
    assert!(doc.mentions("Consistency is doing its quiet work"));

    let mut rng = FixedSequence::new(vec![0.99]);
    let doc = build_progress_comparison(&full_entry(5), Some(&full_entry(5)), &template, 7, &mut rng);
    assert!(doc.mentions("Numbers move slowly"));
}

#[test]
fn report_ends_with_closing_paragraph_after_divider() {
    let mut rng = FixedSequence::new(vec![0.5]);
    let doc = build_progress_comparison(
        &full_entry(5),
        Some(&full_entry(5)),
        &default_metric_template(),
        4,
        &mut rng,
    );
    let blocks = doc.blocks();
    assert!(matches!(blocks[blocks.len() - 2], Block::Divider));
    assert!(matches!(blocks[blocks.len() - 1], Block::Paragraph { .. }));
}
