//! User context passed explicitly into every application entry point.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Identity of the user a computation runs for.
///
/// Supplied by the external identity collaborator and threaded through
/// every handler as a parameter. The engine never looks identity up from
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: UserId,
}

impl UserContext {
    /// Creates a context for the given user.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
