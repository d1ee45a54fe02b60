//! Progress comparison use case.

use tracing::info;

use crate::domain::foundation::UserContext;
use crate::domain::progress::{build_progress_comparison, MetricDef, ProgressEntry};
use crate::domain::report::Document;
use crate::ports::random::RandomSource;

/// Compares a fresh check-in against the user's history.
///
/// The previous entry is the last stored one; the history length drives
/// the closing-line policy. The caller appends `current` to the history
/// afterwards.
pub fn compare_progress(
    ctx: &UserContext,
    current: &ProgressEntry,
    history: &[ProgressEntry],
    template: &[MetricDef],
    rng: &mut dyn RandomSource,
) -> Document {
    let document =
        build_progress_comparison(current, history.last(), template, history.len(), rng);

    info!(
        user = %ctx.user_id,
        history = history.len(),
        "compared progress entry"
    );
    document
}
