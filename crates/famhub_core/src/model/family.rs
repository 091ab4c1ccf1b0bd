//! Family and membership model.
//!
//! # Responsibility
//! - Define the family household entity and the user-to-family association.
//!
//! # Invariants
//! - `Membership.family_id` must reference the family it is presented with;
//!   `SessionContext::set_family` enforces this at the mutation boundary.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a family household.
pub type FamilyId = Uuid;

/// Stable identifier for a membership record.
pub type MembershipId = Uuid;

/// Role a member holds inside one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRole {
    /// Grown-up member with regular permissions.
    Adult,
    /// Child account with reduced permissions.
    Child,
    /// Household administrator.
    Admin,
}

impl FamilyRole {
    /// Human-facing label, e.g. shown as `Your role: Adult`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
            Self::Admin => "Admin",
        }
    }

    /// Stable wire code used across the FFI boundary.
    pub fn code(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::Admin => "admin",
        }
    }

    /// Parses a wire code back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "adult" => Some(Self::Adult),
            "child" => Some(Self::Child),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Family household entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Stable global ID referenced by memberships and events.
    pub id: FamilyId,
    /// Display name, e.g. `The Riveras`.
    pub name: String,
    /// Short code handed out for the join flow.
    pub invite_code: String,
}

impl Family {
    /// Creates a family with a generated stable ID.
    pub fn new(name: impl Into<String>, invite_code: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, invite_code)
    }

    /// Creates a family with a caller-provided stable ID.
    pub fn with_id(
        id: FamilyId,
        name: impl Into<String>,
        invite_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            invite_code: invite_code.into(),
        }
    }
}

/// Association of one user with one family plus an assigned role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Stable global ID of this membership record.
    pub id: MembershipId,
    /// Member this record belongs to.
    pub user_id: UserId,
    /// Family this record belongs to.
    pub family_id: FamilyId,
    /// Role assigned inside the family.
    pub role: FamilyRole,
}

impl Membership {
    /// Creates a membership with a generated stable ID.
    pub fn new(user_id: UserId, family_id: FamilyId, role: FamilyRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            family_id,
            role,
        }
    }

    /// Returns a copy of this membership with a different role.
    ///
    /// Used by the role-selection step; identity fields stay untouched.
    pub fn with_role(&self, role: FamilyRole) -> Self {
        Self { role, ..self.clone() }
    }
}
