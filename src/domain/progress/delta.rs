//! Metric deltas and overall trend classification.

use serde::{Deserialize, Serialize};

use super::{MetricDef, ProgressEntry};

/// Label for a single metric's signed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaBucket {
    StrongUp,
    MildUp,
    Unchanged,
    MildDown,
    StrongDown,
}

impl DeltaBucket {
    /// Buckets a signed delta: >=2 strong up, 1 mild up, 0 unchanged,
    /// -1 mild down, <=-2 strong down.
    pub fn from_delta(delta: i16) -> Self {
        match delta {
            d if d >= 2 => DeltaBucket::StrongUp,
            1 => DeltaBucket::MildUp,
            0 => DeltaBucket::Unchanged,
            -1 => DeltaBucket::MildDown,
            _ => DeltaBucket::StrongDown,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            DeltaBucket::StrongUp => "strong growth",
            DeltaBucket::MildUp => "slight growth",
            DeltaBucket::Unchanged => "no change",
            DeltaBucket::MildDown => "slight dip",
            DeltaBucket::StrongDown => "strong dip",
        }
    }
}

/// One metric compared between consecutive entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub key: String,
    pub label: String,
    pub previous: u8,
    pub current: u8,
    pub delta: i16,
    pub bucket: DeltaBucket,
}

/// Overall direction across all metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Positive,
    Stable,
    Negative,
}

/// Compares two entries metric by metric, in template order.
///
/// Metrics missing from either entry are skipped; the closed
/// questionnaire normally records all of them.
pub fn compute_deltas(
    current: &ProgressEntry,
    previous: &ProgressEntry,
    template: &[MetricDef],
) -> Vec<MetricDelta> {
    template
        .iter()
        .filter_map(|metric| {
            let now = current.value(&metric.key)?;
            let before = previous.value(&metric.key)?;
            let delta = now.value() as i16 - before.value() as i16;
            Some(MetricDelta {
                key: metric.key.clone(),
                label: metric.label.clone(),
                previous: before.value(),
                current: now.value(),
                delta,
                bucket: DeltaBucket::from_delta(delta),
            })
        })
        .collect()
}

/// Classifies the overall direction by strict majority vote among the
/// metrics that grew, fell or stayed unchanged. Every tie, including
/// grew == fell, reads as stable.
pub fn overall_trend(deltas: &[MetricDelta]) -> TrendDirection {
    let grew = deltas.iter().filter(|d| d.delta > 0).count();
    let fell = deltas.iter().filter(|d| d.delta < 0).count();
    let unchanged = deltas.len() - grew - fell;

    if grew > fell && grew > unchanged {
        TrendDirection::Positive
    } else if fell > grew && fell > unchanged {
        TrendDirection::Negative
    } else {
        TrendDirection::Stable
    }
}
