//! Flutter-facing FFI surface for the FamHub core.

pub mod api;
