//! `utils` crate — small pure helpers exercised by the unit-test job.
//!
//! Nothing here has state, side effects or error conditions.

use std::ops::Add;

/// Package version shared by every crate in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return the sum of two numbers.
///
/// No overflow policy beyond the type's own `Add` impl: for the primitive
/// integers that means a panic in debug builds and wrap-around in release.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Return the value back unchanged.
pub fn echo<T>(value: T) -> T {
    value
}
