//! Journal narrative assembly.

use crate::domain::report::Document;

use super::{weekly_stats, JournalEntry};

/// Assembles the reflection narrative for a sealed entry.
///
/// Fixed section order; every free-text section appears only when the
/// user gave it content. The weekly pattern section appears once seven
/// entries (history plus this one) exist, and the repeating-difficulty
/// warning only when one was actually detected.
pub fn build_journal_report(entry: &JournalEntry, history: &[JournalEntry]) -> Document {
    let mut doc = Document::new();
    doc.heading(1, format!("Daily reflection — {}", entry.created_at.date_label()));
    doc.paragraph(format!(
        "Energy {}, stress {}.",
        entry.energy, entry.stress
    ));

    let sections: [(&str, &Vec<String>); 5] = [
        ("What you got done", &entry.achievements),
        ("Actions you took", &entry.actions),
        ("What was hard", &entry.difficulties),
        ("Insights", &entry.insights),
        ("Gratitude", &entry.gratitude),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        doc.heading(2, title);
        doc.bullets(items.clone());
    }

    if !entry.emotions.is_empty() {
        doc.heading(2, "Emotions");
        doc.bullets(
            entry
                .emotions
                .iter()
                .map(|note| format!("{} — {}", note.emotion, note.trigger))
                .collect(),
        );
    }

    let mut window: Vec<JournalEntry> = history.to_vec();
    window.push(entry.clone());
    if let Some(stats) = weekly_stats(&window) {
        doc.divider();
        doc.heading(2, "Your week in numbers");
        doc.paragraph(format!(
            "Average energy {} and stress {} over the last seven entries.",
            stats.avg_energy, stats.avg_stress
        ));
        if !stats.top_emotions.is_empty() {
            doc.bullets(stats.top_emotions.clone());
        }
        if !stats.repeating_difficulties.is_empty() {
            doc.callout(format!(
                "A difficulty keeps coming back: {}. Recurring blockers rarely resolve on their own — pick one small counter-move this week.",
                stats.repeating_difficulties.join("; "),
            ));
        }
    }

    doc.paragraph("Recorded. Small daily notes add up to visible patterns.");
    doc
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
