use crate::domain::foundation::{ScaleValue, Timestamp};
use crate::domain::journal::{build_journal_report, EmotionNote, JournalDraft, JournalEntry};
use crate::domain::report::Block;

fn draft() -> JournalDraft {
    JournalDraft {
        achievements: vec!["Finished the proposal".into()],
        actions: vec!["Sent two follow-ups".into()],
        emotions: vec![EmotionNote { emotion: "pride".into(), trigger: "finishing".into() }],
        difficulties: vec!["Focus after lunch".into()],
        insights: vec![],
        gratitude: vec!["Quiet morning".into()],
        energy: ScaleValue::new(7),
        stress: ScaleValue::new(4),
    }
}

fn entry() -> JournalEntry {
    JournalEntry::from_draft(draft(), Timestamp::from_unix_secs(1_705_276_800))
}

#[test]
fn report_opens_with_dated_heading() {
    let doc = build_journal_report(&entry(), &[]);
    match &doc.blocks()[0] {
        Block::Heading { level: 1, text } => assert!(text.contains("2024-01-15")),
        other => panic!("expected heading, got {:?}", other),
    }
}

#[test]
fn empty_sections_are_omitted() {
    let doc = build_journal_report(&entry(), &[]);
    // Insights were empty, so no "Insights" heading appears.
    assert!(!doc.mentions("Insights"));
    assert!(doc.mentions("What you got done"));
}

#[test]
fn emotions_render_with_their_triggers() {
    let doc = build_journal_report(&entry(), &[]);
    assert!(doc.mentions("pride — finishing"));
}

#[test]
fn weekly_section_needs_seven_entries() {
    let doc = build_journal_report(&entry(), &[]);
    assert!(!doc.mentions("Your week in numbers"));

    let history: Vec<JournalEntry> = (0..6).map(|_| entry()).collect();
    let doc = build_journal_report(&entry(), &history);
    assert!(doc.mentions("Your week in numbers"));
}

#[test]
fn repeating_difficulty_warning_is_conditional() {
    // Seven entries all sharing one difficulty text: warning appears.
    let history: Vec<JournalEntry> = (0..6).map(|_| entry()).collect();
    let doc = build_journal_report(&entry(), &history);
    assert!(doc.mentions("keeps coming back"));

    // Distinct difficulties: weekly section without the warning.
    let history: Vec<JournalEntry> = (0..6)
        .map(|i| {
            let mut d = draft();
            d.difficulties = vec![format!("Unique difficulty number {}", i)];
            JournalEntry::from_draft(d, Timestamp::from_unix_secs(1_705_276_800))
        })
        .collect();
    let mut current = draft();
    current.difficulties = vec!["Another one-off difficulty".into()];
    let current = JournalEntry::from_draft(current, Timestamp::from_unix_secs(1_705_276_800));
    let doc = build_journal_report(&current, &history);
    assert!(doc.mentions("Your week in numbers"));
    assert!(!doc.mentions("keeps coming back"));
}
