//! Weekly aggregate statistics over journal entries.

use serde::{Deserialize, Serialize};

use super::JournalEntry;

/// Entries required before weekly stats are computed at all.
pub const WEEKLY_WINDOW: usize = 7;

/// Most-frequent emotions reported.
const TOP_EMOTIONS: usize = 5;

/// Characters a difficulty is truncated to before counting recurrences.
const DIFFICULTY_KEY_CHARS: usize = 30;

/// Occurrences within the window that make a difficulty "repeating".
const REPEAT_THRESHOLD: usize = 3;

/// Aggregates over the most recent seven entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub avg_energy: f64,
    pub avg_stress: f64,
    /// Up to five most frequent emotion labels.
    pub top_emotions: Vec<String>,
    /// Difficulty texts recurring three or more times.
    pub repeating_difficulties: Vec<String>,
}

/// Computes weekly stats, or `None` when fewer than seven entries exist.
///
/// Entries arrive in insertion order; the window is the last seven.
/// Averages are rounded to one decimal. Emotion ties resolve to
/// first-encountered order, which is why counting uses an
/// insertion-ordered list rather than a hash map.
pub fn weekly_stats(entries: &[JournalEntry]) -> Option<WeeklyStats> {
    if entries.len() < WEEKLY_WINDOW {
        return None;
    }
    let window = &entries[entries.len() - WEEKLY_WINDOW..];

    let avg_energy = round1(
        window.iter().map(|e| e.energy.as_f64()).sum::<f64>() / WEEKLY_WINDOW as f64,
    );
    let avg_stress = round1(
        window.iter().map(|e| e.stress.as_f64()).sum::<f64>() / WEEKLY_WINDOW as f64,
    );

    let mut emotion_counts: Vec<(String, usize)> = Vec::new();
    for entry in window {
        for note in &entry.emotions {
            match emotion_counts.iter_mut().find(|(label, _)| *label == note.emotion) {
                Some(found) => found.1 += 1,
                None => emotion_counts.push((note.emotion.clone(), 1)),
            }
        }
    }
    emotion_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let top_emotions = emotion_counts
        .into_iter()
        .take(TOP_EMOTIONS)
        .map(|(label, _)| label)
        .collect();

    let mut difficulty_counts: Vec<(String, String, usize)> = Vec::new();
    for entry in window {
        for difficulty in &entry.difficulties {
            let key: String = difficulty.to_lowercase().chars().take(DIFFICULTY_KEY_CHARS).collect();
            match difficulty_counts.iter_mut().find(|(k, _, _)| *k == key) {
                Some(found) => found.2 += 1,
                None => difficulty_counts.push((key, difficulty.clone(), 1)),
            }
        }
    }
    let repeating_difficulties = difficulty_counts
        .into_iter()
        .filter(|(_, _, count)| *count >= REPEAT_THRESHOLD)
        .map(|(_, original, _)| original)
        .collect();

    Some(WeeklyStats {
        avg_energy,
        avg_stress,
        top_emotions,
        repeating_difficulties,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
