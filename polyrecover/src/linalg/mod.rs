//! Exact linear algebra over the integers.

pub mod matrix;
pub mod solver;

// Re-exports.
pub use self::solver::{solve, ExactLinearSolver, SolverStats};
