//! Family data collaborator contract.
//!
//! # Responsibility
//! - Define retrieval of families, memberships, rosters and events for the
//!   app controller.
//!
//! # Invariants
//! - `membership_for` must return a membership referencing exactly the
//!   requested user and family.

use crate::model::event::CalendarEvent;
use crate::model::family::{Family, FamilyId, FamilyRole, Membership};
use crate::model::user::{UserId, UserProfile};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the family data collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Family name is blank after trim.
    InvalidFamilyName,
    /// Invite code does not match any family.
    UnknownInviteCode(String),
    /// Family ID does not match any family.
    FamilyNotFound(FamilyId),
    /// Backend is unreachable or refused the request.
    Unavailable(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFamilyName => write!(f, "family name must not be blank"),
            Self::UnknownInviteCode(code) => write!(f, "no family found for invite code `{code}`"),
            Self::FamilyNotFound(id) => write!(f, "family not found: {id}"),
            Self::Unavailable(detail) => write!(f, "family service unavailable: {detail}"),
        }
    }
}

impl Error for DirectoryError {}

/// In-process interface for family and event retrieval.
pub trait FamilyDirectory {
    /// Creates a new family named `name` and returns it.
    fn create_family(&self, name: &str) -> Result<Family, DirectoryError>;

    /// Resolves an invite code to an existing family.
    fn join_family(&self, invite_code: &str) -> Result<Family, DirectoryError>;

    /// Establishes a membership for `user_id` in `family_id` with `role`.
    fn membership_for(
        &self,
        user_id: UserId,
        family_id: FamilyId,
        role: FamilyRole,
    ) -> Result<Membership, DirectoryError>;

    /// Returns the member profiles of a family.
    fn roster(&self, family_id: FamilyId) -> Result<Vec<UserProfile>, DirectoryError>;

    /// Returns the upcoming calendar events of a family.
    fn events(&self, family_id: FamilyId) -> Result<Vec<CalendarEvent>, DirectoryError>;
}
