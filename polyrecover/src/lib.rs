//! # Polynomial recovery
//!
//! This library recovers the constant term of an unknown polynomial with
//! integer coefficients from sample points whose y-coordinates are written
//! in bases between 2 and 36.
//!
//! All arithmetic is exact. Values are arbitrary-precision integers from
//! decoding to the final result, and no step reduces modulo a prime.
//!
//! ## Supported Methods
//!
//! - Fraction-free Gaussian elimination on the Vandermonde system
//! - Lagrange interpolation at zero

pub mod common;
pub mod config;
pub mod decode;
pub mod document;
pub mod errors;
pub mod linalg;
pub mod poly;
pub mod recovery;

// Re-exports.
pub use self::{
    config::{Config, Method},
    document::Document,
    errors::Error,
    recovery::{Recoverer, Recovery},
};
