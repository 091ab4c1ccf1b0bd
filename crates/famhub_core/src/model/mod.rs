//! Domain model for the family-organizer core.
//!
//! # Responsibility
//! - Define the canonical entities shared by session, router and screen
//!   layers: users, families, memberships and calendar events.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID-backed ID.
//! - A `Membership` always references exactly one user and one family.

pub mod event;
pub mod family;
pub mod user;
