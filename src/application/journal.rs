//! Journaling use case.

use tracing::info;

use crate::domain::foundation::{Timestamp, UserContext};
use crate::domain::journal::{build_journal_report, JournalDraft, JournalEntry};
use crate::domain::report::render_plain_text;

/// Seals a completed conversational flow into a journal entry.
///
/// The narrative is assembled against the user's history (for the
/// weekly pattern section), rendered to plain text and stored on the
/// entry itself. The caller appends the result to the user's
/// append-only entry list.
pub fn complete_journal_entry(
    ctx: &UserContext,
    draft: JournalDraft,
    history: &[JournalEntry],
) -> JournalEntry {
    let mut entry = JournalEntry::from_draft(draft, Timestamp::now());
    let document = build_journal_report(&entry, history);
    entry.report = render_plain_text(&document);

    info!(
        user = %ctx.user_id,
        history = history.len(),
        "sealed journal entry"
    );
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ScaleValue, UserId};
    use crate::ports::history::{HistoryStore, InMemoryHistory};

    fn ctx() -> UserContext {
        UserContext::new(UserId::new("user-1").unwrap())
    }

    fn draft() -> JournalDraft {
        JournalDraft {
            achievements: vec!["Closed a client".into()],
            energy: ScaleValue::new(7),
            stress: ScaleValue::new(3),
            ..Default::default()
        }
    }

    #[test]
    fn sealed_entry_carries_rendered_report() {
        let entry = complete_journal_entry(&ctx(), draft(), &[]);
        assert!(entry.report.contains("Daily reflection"));
        assert!(entry.report.contains("Closed a client"));
    }

    #[test]
    fn weekly_section_appears_through_the_history_store() {
        let ctx = ctx();
        let mut store: InMemoryHistory<JournalEntry> = InMemoryHistory::new();
        for _ in 0..6 {
            let entry = complete_journal_entry(&ctx, draft(), &store.recent(&ctx.user_id, 7));
            store.append(&ctx.user_id, entry);
        }
        // Sixth entry: still short of the seven-entry window.
        assert!(!store.recent(&ctx.user_id, 1)[0].report.contains("week in numbers"));

        let entry = complete_journal_entry(&ctx, draft(), &store.recent(&ctx.user_id, 7));
        assert!(entry.report.contains("Your week in numbers"));
    }
}
