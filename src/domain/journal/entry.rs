//! Journal entry record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EntryId, ScaleValue, Timestamp};

/// An emotion together with what triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionNote {
    pub emotion: String,
    pub trigger: String,
}

/// What the conversational flow collected before the entry is sealed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDraft {
    pub achievements: Vec<String>,
    pub actions: Vec<String>,
    pub emotions: Vec<EmotionNote>,
    pub difficulties: Vec<String>,
    pub insights: Vec<String>,
    pub gratitude: Vec<String>,
    pub energy: ScaleValue,
    pub stress: ScaleValue,
}

/// A completed journal entry.
///
/// Appended to the user's entry list when the multi-stage flow
/// completes; never edited in place afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub created_at: Timestamp,
    pub achievements: Vec<String>,
    pub actions: Vec<String>,
    pub emotions: Vec<EmotionNote>,
    pub difficulties: Vec<String>,
    pub insights: Vec<String>,
    pub gratitude: Vec<String>,
    pub energy: ScaleValue,
    pub stress: ScaleValue,
    /// Plain-text rendering of the generated narrative.
    pub report: String,
}

impl JournalEntry {
    /// Seals a draft into an entry; the narrative is attached afterwards
    /// by the journal handler.
    pub fn from_draft(draft: JournalDraft, created_at: Timestamp) -> Self {
        Self {
            id: EntryId::new(),
            created_at,
            achievements: draft.achievements,
            actions: draft.actions,
            emotions: draft.emotions,
            difficulties: draft.difficulties,
            insights: draft.insights,
            gratitude: draft.gratitude,
            energy: draft.energy,
            stress: draft.stress,
            report: String::new(),
        }
    }
}
