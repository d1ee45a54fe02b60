//! Follow-up prompts for the conversational journaling flow.

use crate::ports::random::{pick_index, RandomSource};

/// Prompts nudging the user to elaborate mid-flow.
const FOLLOW_UP_PROMPTS: [&str; 4] = [
    "What else comes to mind about that?",
    "How did that affect the rest of your day?",
    "What would you do differently next time?",
    "Who or what helped you with that?",
];

/// Picks a follow-up prompt through the injected random source.
pub fn follow_up_prompt(rng: &mut dyn RandomSource) -> &'static str {
    FOLLOW_UP_PROMPTS[pick_index(rng, FOLLOW_UP_PROMPTS.len())]
}
