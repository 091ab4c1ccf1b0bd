//! Top-level flow state machine.
//!
//! # Responsibility
//! - Define which top-level screen family is active and which forward
//!   transitions are legal.
//!
//! # Invariants
//! - Exactly one `FlowState` is active at a time; the router derives the
//!   rendered screen from it.
//! - Transitions outside the table are rejected by the app controller, not
//!   silently applied.

use serde::{Deserialize, Serialize};

/// Selector for the active top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// First-run introduction pages.
    Onboarding,
    /// Choose between creating and joining a family.
    FamilySelection,
    /// Create-family form.
    CreateFamily,
    /// Join-family form (invite code entry).
    JoinFamily,
    /// Pick the role held inside the chosen family.
    RoleSelection,
    /// Main family home screen.
    FamilyDashboard,
}

impl FlowState {
    /// All states, in canonical forward order.
    pub const ALL: [FlowState; 6] = [
        Self::Onboarding,
        Self::FamilySelection,
        Self::CreateFamily,
        Self::JoinFamily,
        Self::RoleSelection,
        Self::FamilyDashboard,
    ];

    /// Stable wire code used across the FFI boundary.
    pub fn code(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::FamilySelection => "family_selection",
            Self::CreateFamily => "create_family",
            Self::JoinFamily => "join_family",
            Self::RoleSelection => "role_selection",
            Self::FamilyDashboard => "family_dashboard",
        }
    }

    /// Parses a wire code back into a flow state.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.code() == value)
    }

    /// Returns whether advancing from `self` to `next` is a legal forward
    /// transition.
    ///
    /// Forward path: onboarding -> family selection -> create/join family ->
    /// role selection -> dashboard.
    pub fn can_advance_to(self, next: FlowState) -> bool {
        matches!(
            (self, next),
            (Self::Onboarding, Self::FamilySelection)
                | (Self::FamilySelection, Self::CreateFamily)
                | (Self::FamilySelection, Self::JoinFamily)
                | (Self::CreateFamily, Self::RoleSelection)
                | (Self::JoinFamily, Self::RoleSelection)
                | (Self::RoleSelection, Self::FamilyDashboard)
        )
    }

    /// Canonical predecessor for platform-default back navigation.
    ///
    /// `None` marks states the user cannot back out of (first screen and the
    /// dashboard home). Role selection backs to family selection because the
    /// create/join branch is not recorded.
    pub fn back_target(self) -> Option<FlowState> {
        match self {
            Self::Onboarding | Self::FamilyDashboard => None,
            Self::FamilySelection => Some(Self::Onboarding),
            Self::CreateFamily | Self::JoinFamily => Some(Self::FamilySelection),
            Self::RoleSelection => Some(Self::FamilySelection),
        }
    }
}
