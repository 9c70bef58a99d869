//! Fraction-free Gaussian elimination.
//!
//! Ordinary elimination divides by the pivot and leaves the integers. Here
//! the pivot row and the eliminated row are cross-multiplied and the result
//! is divided by the pivot of the previous step (Bareiss):
//!
//! ```text
//! row_r = (row_r * a_{i,i} - row_i * a_{r,i}) / a_{i-1,i-1}
//! ```
//!
//! The division is always exact, every entry after step `i` being a minor
//! of the original augmented matrix. Entry sizes are therefore bounded by
//! Hadamard's inequality and grow linearly with the number of points
//! instead of doubling with each pivot column. The remaining divisions
//! happen during back-substitution and are exact whenever the system has an
//! integer solution.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use slog::{debug, Logger};

use crate::{
    common::logger::get_logger,
    errors::Error,
    linalg::matrix::Matrix,
    poly::{Point, Polynomial},
};

/// Statistics from a single solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Number of row swaps performed.
    pub swaps: usize,
    /// Number of rows eliminated below a pivot.
    pub eliminations: usize,
    /// Bit length of the largest matrix element after elimination.
    pub max_bits: u64,
}

/// Solver for the Vandermonde system `A * a = y` of k points, where `a`
/// holds the coefficients of the polynomial of degree at most k-1 through
/// the points.
pub struct ExactLinearSolver {
    logger: Logger,
    /// Coefficient matrix, `A[i][j] = x_i^j`.
    matrix: Matrix,
    /// Right-hand side, `y[i] = y_i`.
    rhs: Vec<BigInt>,
    /// Statistics.
    stats: SolverStats,
}

impl ExactLinearSolver {
    /// Creates a new solver for the given points.
    pub fn new(points: &[Point]) -> Result<Self, Error> {
        if points.is_empty() {
            return Err(Error::InvalidThreshold);
        }

        let xs: Vec<_> = points.iter().map(|p| p.x.clone()).collect();
        let rhs = points.iter().map(|p| p.y.clone()).collect();

        Ok(Self {
            logger: get_logger("linalg/solver"),
            matrix: Matrix::vandermonde(&xs),
            rhs,
            stats: SolverStats::default(),
        })
    }

    /// Returns the current statistics.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Solves the system and returns the polynomial's coefficients.
    ///
    /// The coefficient of the constant term is the first element.
    pub fn solve(&mut self) -> Result<Polynomial, Error> {
        self.eliminate()?;
        let a = self.back_substitute()?;

        self.stats.max_bits = self.matrix.max_bits();
        debug!(self.logger, "System solved";
            "size" => self.matrix.size,
            "swaps" => self.stats.swaps,
            "eliminations" => self.stats.eliminations,
            "max_bits" => self.stats.max_bits,
        );

        Ok(Polynomial::with_coefficients(a))
    }

    /// Reduces the matrix to upper triangular form.
    fn eliminate(&mut self) -> Result<(), Error> {
        let n = self.matrix.size;
        let mut prev = BigInt::one();

        for i in 0..n {
            let pivot_row = self.find_pivot(i);
            if pivot_row != i {
                self.matrix.swap_rows(i, pivot_row);
                self.rhs.swap(i, pivot_row);
                self.stats.swaps += 1;
            }

            if self.matrix.m[i][i].is_zero() {
                return Err(Error::SingularMatrix { column: i });
            }

            // Rows with a zero factor still need scaling by pivot / prev to
            // stay minors.
            for r in (i + 1)..n {
                if !self.matrix.m[r][i].is_zero() {
                    self.stats.eliminations += 1;
                }
                self.eliminate_row(r, i, &prev)?;
            }
            prev = self.matrix.m[i][i].clone();
        }

        Ok(())
    }

    /// Returns the row in `[col, n)` with the largest absolute value in the
    /// given column, preferring the topmost row on ties.
    fn find_pivot(&self, col: usize) -> usize {
        let mut max_row = col;
        for r in (col + 1)..self.matrix.size {
            if self.matrix.m[r][col].magnitude() > self.matrix.m[max_row][col].magnitude() {
                max_row = r;
            }
        }
        max_row
    }

    /// Clears column `col` of row `r` using the pivot row `col`, dividing
    /// by the previous pivot `prev`.
    fn eliminate_row(&mut self, r: usize, col: usize, prev: &BigInt) -> Result<(), Error> {
        let (upper, lower) = self.matrix.m.split_at_mut(r);
        let pivot_row = &upper[col];
        let row = &mut lower[0];

        let pivot = pivot_row[col].clone();
        let factor = row[col].clone();

        for j in col..row.len() {
            row[j] = exact_div(&row[j] * &pivot - &pivot_row[j] * &factor, prev, r)?;
        }
        self.rhs[r] = exact_div(&self.rhs[r] * &pivot - &self.rhs[col] * &factor, prev, r)?;

        Ok(())
    }

    /// Solves the upper triangular system from the bottom row up.
    fn back_substitute(&self) -> Result<Vec<BigInt>, Error> {
        let n = self.matrix.size;
        let mut a = vec![BigInt::zero(); n];

        for i in (0..n).rev() {
            let row = &self.matrix.m[i];
            let mut sum = BigInt::zero();
            for j in (i + 1)..n {
                sum += &row[j] * &a[j];
            }

            let (q, r) = (&self.rhs[i] - sum).div_rem(&row[i]);
            if !r.is_zero() {
                return Err(Error::NonExactDivision { row: i });
            }
            a[i] = q;
        }

        Ok(a)
    }
}

fn exact_div(value: BigInt, divisor: &BigInt, row: usize) -> Result<BigInt, Error> {
    let (q, r) = value.div_rem(divisor);
    if !r.is_zero() {
        return Err(Error::NonExactDivision { row });
    }
    Ok(q)
}

/// Returns the coefficients of the polynomial of degree at most k-1
/// through the given k points.
pub fn solve(points: &[Point]) -> Result<Polynomial, Error> {
    ExactLinearSolver::new(points)?.solve()
}
