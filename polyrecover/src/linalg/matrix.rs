use num_bigint::BigInt;
use num_traits::Zero;

use crate::poly::powers;

/// Square matrix of arbitrary-precision integers.
///
/// Only the solver builds and mutates matrices. Each one lives for the
/// duration of a single solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// The number of rows and columns.
    pub size: usize,
    /// The matrix elements, where `m[i][j]` is the element in row `i`
    /// and column `j`.
    pub m: Vec<Vec<BigInt>>,
}

impl Matrix {
    /// Creates a matrix initialized to zero.
    pub fn zero(size: usize) -> Self {
        let m = vec![vec![BigInt::zero(); size]; size];
        Self { size, m }
    }

    /// Constructs the Vandermonde matrix of the given x-coordinates.
    ///
    /// ```text
    /// M = [x_i^j]
    /// ```
    pub fn vandermonde(xs: &[BigInt]) -> Self {
        let size = xs.len();
        let m = xs
            .iter()
            .map(|x| powers(x, size.saturating_sub(1)))
            .collect();

        Self { size, m }
    }

    /// Swaps two rows.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.m.swap(i, j);
    }

    /// Returns true iff every element below the main diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.m
            .iter()
            .enumerate()
            .all(|(i, row)| row[..i].iter().all(|a| a.is_zero()))
    }

    /// Returns the bit length of the largest element.
    pub fn max_bits(&self) -> u64 {
        self.m
            .iter()
            .flatten()
            .map(BigInt::bits)
            .max()
            .unwrap_or_default()
    }
}
