//! View router: derives the rendered screen from flow state and session.
//!
//! # Responsibility
//! - Map `(FlowState, SessionContext)` to exactly one `Screen`.
//! - Degrade to a placeholder when a guarded screen lacks its session data.
//!
//! # Invariants
//! - `route` is pure, total and deterministic; it never panics and has no
//!   side effects.
//! - Missing session data on a guarded state yields `Screen::Placeholder`,
//!   never an error.

use crate::flow::FlowState;
use crate::session::SessionContext;

/// Why a placeholder is shown instead of the requested screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// No signed-in user in the session.
    MissingUser,
    /// No current family in the session.
    MissingFamily,
    /// No membership record in the session.
    MissingMembership,
}

impl PlaceholderReason {
    /// Short human-readable explanation shown on the placeholder screen.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingUser => "Waiting for your account to load.",
            Self::MissingFamily => "Waiting for your family to load.",
            Self::MissingMembership => "Waiting for your membership to load.",
        }
    }
}

/// The one screen selected for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    FamilySelection,
    CreateFamily,
    JoinFamily,
    RoleSelection,
    FamilyDashboard,
    /// Stand-in rendered when required session data is absent.
    Placeholder(PlaceholderReason),
}

impl Screen {
    /// Stable wire code used across the FFI boundary.
    pub fn code(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::FamilySelection => "family_selection",
            Self::CreateFamily => "create_family",
            Self::JoinFamily => "join_family",
            Self::RoleSelection => "role_selection",
            Self::FamilyDashboard => "family_dashboard",
            Self::Placeholder(_) => "placeholder",
        }
    }
}

/// Selects the screen to render for the current flow state and session.
///
/// # Contract
/// - Returns exactly one screen for every input.
/// - `RoleSelection` requires a signed-in user and a current family.
/// - `FamilyDashboard` additionally requires a membership.
/// - Guard failures degrade silently to a placeholder.
pub fn route(flow: FlowState, session: &SessionContext) -> Screen {
    match flow {
        FlowState::Onboarding => Screen::Onboarding,
        FlowState::FamilySelection => Screen::FamilySelection,
        FlowState::CreateFamily => Screen::CreateFamily,
        FlowState::JoinFamily => Screen::JoinFamily,
        FlowState::RoleSelection => match guard_user_and_family(session) {
            Some(reason) => Screen::Placeholder(reason),
            None => Screen::RoleSelection,
        },
        FlowState::FamilyDashboard => {
            if let Some(reason) = guard_user_and_family(session) {
                return Screen::Placeholder(reason);
            }
            if session.membership().is_none() {
                return Screen::Placeholder(PlaceholderReason::MissingMembership);
            }
            Screen::FamilyDashboard
        }
    }
}

fn guard_user_and_family(session: &SessionContext) -> Option<PlaceholderReason> {
    if session.user().is_none() {
        return Some(PlaceholderReason::MissingUser);
    }
    if session.family().is_none() {
        return Some(PlaceholderReason::MissingFamily);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{route, PlaceholderReason, Screen};
    use crate::flow::FlowState;
    use crate::session::SessionContext;

    #[test]
    fn unguarded_states_map_one_to_one() {
        let session = SessionContext::new();
        assert_eq!(route(FlowState::Onboarding, &session), Screen::Onboarding);
        assert_eq!(
            route(FlowState::FamilySelection, &session),
            Screen::FamilySelection
        );
        assert_eq!(route(FlowState::CreateFamily, &session), Screen::CreateFamily);
        assert_eq!(route(FlowState::JoinFamily, &session), Screen::JoinFamily);
    }

    #[test]
    fn guarded_states_degrade_to_placeholder_on_empty_session() {
        let session = SessionContext::new();
        assert_eq!(
            route(FlowState::RoleSelection, &session),
            Screen::Placeholder(PlaceholderReason::MissingUser)
        );
        assert_eq!(
            route(FlowState::FamilyDashboard, &session),
            Screen::Placeholder(PlaceholderReason::MissingUser)
        );
    }
}
