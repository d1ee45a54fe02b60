//! Progress entry record and metric template.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{EntryId, ScaleValue, Timestamp};

/// One tracked metric: stable key plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDef {
    pub key: String,
    pub label: String,
}

impl MetricDef {
    /// Creates a metric definition.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The default progress questionnaire, in report order.
pub fn default_metric_template() -> Vec<MetricDef> {
    vec![
        MetricDef::new("energy", "Energy"),
        MetricDef::new("clarity", "Clarity of direction"),
        MetricDef::new("confidence", "Confidence"),
        MetricDef::new("discipline", "Discipline"),
        MetricDef::new("satisfaction", "Satisfaction"),
    ]
}

/// A progress check-in.
///
/// Compared only against the immediately preceding entry of the same
/// user; the list is append-only and ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: EntryId,
    pub date: Timestamp,
    /// Metric key to self-reported rating.
    pub values: HashMap<String, ScaleValue>,
    pub main_focus: String,
    pub key_thought: String,
}

impl ProgressEntry {
    /// Creates an entry for the given ratings.
    pub fn new(
        date: Timestamp,
        values: HashMap<String, ScaleValue>,
        main_focus: impl Into<String>,
        key_thought: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            date,
            values,
            main_focus: main_focus.into(),
            key_thought: key_thought.into(),
        }
    }

    /// Returns the rating for a metric, if recorded.
    pub fn value(&self, key: &str) -> Option<ScaleValue> {
        self.values.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_five_metrics_in_report_order() {
        let template = default_metric_template();
        assert_eq!(template.len(), 5);
        assert_eq!(template[0].key, "energy");
        assert_eq!(template[4].key, "satisfaction");
    }

    #[test]
    fn entry_returns_recorded_values() {
        let mut values = HashMap::new();
        values.insert("energy".to_string(), ScaleValue::new(6));
        let entry = ProgressEntry::new(Timestamp::now(), values, "launch", "keep going");
        assert_eq!(entry.value("energy").unwrap().value(), 6);
        assert!(entry.value("clarity").is_none());
    }

    #[test]
    fn entry_serializes_with_camel_case_keys() {
        let entry = ProgressEntry::new(Timestamp::now(), HashMap::new(), "focus", "thought");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("mainFocus"));
        assert!(json.contains("keyThought"));
    }
}
