//! Screen view models.
//!
//! # Responsibility
//! - Build display-ready structs from domain data; each builder is a pure
//!   function of its inputs.
//! - Surface user intents as data the UI dispatches back to the controller.
//!
//! # Invariants
//! - No screen module performs I/O or mutates session state.

pub mod dashboard;
pub mod event_detail;
pub mod legal;
pub mod onboarding;
pub mod placeholder;
