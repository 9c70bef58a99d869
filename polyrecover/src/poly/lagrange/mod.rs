//! Lagrange interpolation.

mod zero;

// Re-exports.
pub use self::zero::*;
