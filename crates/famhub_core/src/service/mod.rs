//! Boundary collaborator contracts and their placeholder implementations.
//!
//! # Responsibility
//! - Define the in-process interfaces the app controller calls for
//!   authentication and family data retrieval.
//! - Keep the controller decoupled from any real backend.
//!
//! # Invariants
//! - Collaborator failures are semantic errors; the controller collapses
//!   them into the single session error message.

pub mod auth;
pub mod directory;
pub mod mock;
