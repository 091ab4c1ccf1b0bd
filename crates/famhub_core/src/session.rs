//! Session context: the in-memory holder of current user, family,
//! membership, navigation stack, loading flag and error message.
//!
//! # Responsibility
//! - Own all mutable per-session state behind named operations.
//! - Enforce the family/membership consistency invariant at the mutation
//!   boundary.
//!
//! # Invariants
//! - `set_family` rejects a membership that does not reference the presented
//!   family (and current user, when one is set); rejection leaves the
//!   context unchanged.
//! - `sign_out` always results in an empty context.
//! - Fields are never written directly from outside this module.

use crate::model::family::{Family, FamilyId, Membership};
use crate::model::user::{UserId, UserProfile};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from session mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Membership references a different family than the one presented.
    MembershipFamilyMismatch {
        membership_family: FamilyId,
        family: FamilyId,
    },
    /// Membership references a different user than the signed-in one.
    MembershipUserMismatch {
        membership_user: UserId,
        user: UserId,
    },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MembershipFamilyMismatch {
                membership_family,
                family,
            } => write!(
                f,
                "membership belongs to family {membership_family}, not {family}"
            ),
            Self::MembershipUserMismatch {
                membership_user,
                user,
            } => write!(
                f,
                "membership belongs to user {membership_user}, not {user}"
            ),
        }
    }
}

impl Error for SessionError {}

/// Mutable per-session state, exclusively owned by the UI thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<UserProfile>,
    family: Option<Family>,
    membership: Option<Membership>,
    nav_stack: Vec<String>,
    loading: bool,
    error_message: Option<String>,
}

impl SessionContext {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn family(&self) -> Option<&Family> {
        self.family.as_ref()
    }

    pub fn membership(&self) -> Option<&Membership> {
        self.membership.as_ref()
    }

    pub fn nav_stack(&self) -> &[String] {
        &self.nav_stack
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Establishes the signed-in user identity.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Sets the current family and membership together.
    ///
    /// # Errors
    /// - `MembershipFamilyMismatch` when `membership.family_id != family.id`.
    /// - `MembershipUserMismatch` when a user is signed in and
    ///   `membership.user_id` differs.
    ///
    /// On error the context is left unchanged.
    pub fn set_family(
        &mut self,
        family: Family,
        membership: Membership,
    ) -> Result<(), SessionError> {
        if membership.family_id != family.id {
            return Err(SessionError::MembershipFamilyMismatch {
                membership_family: membership.family_id,
                family: family.id,
            });
        }
        if let Some(user) = &self.user {
            if membership.user_id != user.id {
                return Err(SessionError::MembershipUserMismatch {
                    membership_user: membership.user_id,
                    user: user.id,
                });
            }
        }
        self.family = Some(family);
        self.membership = Some(membership);
        Ok(())
    }

    /// Clears family and membership only.
    ///
    /// The resulting flow transition is owned by the caller; this operation
    /// never touches user identity or navigation state.
    pub fn leave_family(&mut self) {
        self.family = None;
        self.membership = None;
    }

    /// Resets the whole context: user, family, membership, navigation
    /// stack, loading flag and error message.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    /// Dismisses the current error message, if any.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Surfaces a human-readable error message to the UI.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Pushes a sub-screen name onto the navigation stack.
    pub fn push_screen(&mut self, name: impl Into<String>) {
        self.nav_stack.push(name.into());
    }

    /// Pops the most recently pushed sub-screen, if any.
    pub fn pop_screen(&mut self) -> Option<String> {
        self.nav_stack.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionContext, SessionError};
    use crate::model::family::{Family, FamilyRole, Membership};
    use crate::model::user::UserProfile;
    use uuid::Uuid;

    #[test]
    fn set_family_accepts_matching_membership() {
        let mut session = SessionContext::new();
        let user = UserProfile::new("Maya");
        session.set_user(user.clone());

        let family = Family::new("The Riveras", "RIVERA1");
        let membership = Membership::new(user.id, family.id, FamilyRole::Adult);
        session
            .set_family(family.clone(), membership.clone())
            .expect("matching membership should be accepted");
        assert_eq!(session.family(), Some(&family));
        assert_eq!(session.membership(), Some(&membership));
    }

    #[test]
    fn set_family_rejects_foreign_family_and_leaves_context_unchanged() {
        let mut session = SessionContext::new();
        let family = Family::new("The Riveras", "RIVERA1");
        let membership = Membership::new(Uuid::new_v4(), Uuid::new_v4(), FamilyRole::Adult);

        let err = session
            .set_family(family, membership)
            .expect_err("foreign membership must be rejected");
        assert!(matches!(err, SessionError::MembershipFamilyMismatch { .. }));
        assert!(session.family().is_none());
        assert!(session.membership().is_none());
    }

    #[test]
    fn set_family_rejects_membership_of_another_user() {
        let mut session = SessionContext::new();
        session.set_user(UserProfile::new("Maya"));

        let family = Family::new("The Riveras", "RIVERA1");
        let membership = Membership::new(Uuid::new_v4(), family.id, FamilyRole::Adult);

        let err = session
            .set_family(family, membership)
            .expect_err("another user's membership must be rejected");
        assert!(matches!(err, SessionError::MembershipUserMismatch { .. }));
    }

    #[test]
    fn leave_family_keeps_user_and_navigation() {
        let mut session = SessionContext::new();
        let user = UserProfile::new("Maya");
        session.set_user(user.clone());
        let family = Family::new("The Riveras", "RIVERA1");
        let membership = Membership::new(user.id, family.id, FamilyRole::Admin);
        session.set_family(family, membership).unwrap();
        session.push_screen("event_detail");

        session.leave_family();
        assert!(session.family().is_none());
        assert!(session.membership().is_none());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(session.nav_stack(), ["event_detail"]);
    }

    #[test]
    fn sign_out_empties_everything() {
        let mut session = SessionContext::new();
        let user = UserProfile::new("Maya");
        session.set_user(user.clone());
        let family = Family::new("The Riveras", "RIVERA1");
        let membership = Membership::new(user.id, family.id, FamilyRole::Adult);
        session.set_family(family, membership).unwrap();
        session.push_screen("event_detail");
        session.set_loading(true);
        session.set_error("something failed");

        session.sign_out();
        assert!(session.user().is_none());
        assert!(session.family().is_none());
        assert!(session.membership().is_none());
        assert!(session.nav_stack().is_empty());
        assert!(!session.is_loading());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn clear_error_always_leaves_no_message() {
        let mut session = SessionContext::new();
        session.clear_error();
        assert!(session.error_message().is_none());

        session.set_error("auth failed");
        session.clear_error();
        assert!(session.error_message().is_none());
    }

    #[test]
    fn nav_stack_is_ordered() {
        let mut session = SessionContext::new();
        session.push_screen("calendar");
        session.push_screen("event_detail");
        assert_eq!(session.pop_screen().as_deref(), Some("event_detail"));
        assert_eq!(session.pop_screen().as_deref(), Some("calendar"));
        assert_eq!(session.pop_screen(), None);
    }
}
