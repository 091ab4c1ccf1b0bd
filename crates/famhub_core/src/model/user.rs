//! User identity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a signed-in user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Identifier-to-display-name mapping used for rendering participant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable global ID used for membership and participant references.
    pub id: UserId,
    /// Name shown in screens; never used as an identity key.
    pub display_name: String,
}

impl UserProfile {
    /// Creates a profile with a generated stable ID.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), display_name)
    }

    /// Creates a profile with a caller-provided stable ID.
    ///
    /// Used by collaborator stubs where identity already exists externally.
    pub fn with_id(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
