//! Polynomials with arbitrary-precision integer coefficients.
//!
//! Features include:
//!
//! - Points and deterministic point sets
//! - Evaluation of univariate polynomials
//! - Exact Lagrange interpolation at zero

mod arith;
pub mod lagrange;
mod point;
mod set;
mod univariate;

// Re-exports.
pub use self::{arith::*, point::*, set::*, univariate::*};
