//! Smoke binary for the FamHub core crate.
//!
//! Prints the core health probe and version so the workspace can be sanity
//! checked from a shell, without any Flutter or FFI runtime in the loop.

fn main() {
    println!("famhub_core ping={}", famhub_core::ping());
    println!("famhub_core version={}", famhub_core::core_version());
}
