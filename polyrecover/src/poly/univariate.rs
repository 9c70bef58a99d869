use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::poly::{powers, Point};

/// Univariate polynomial with arbitrary-precision integer coefficients.
///
/// ```text
/// A(x) = \sum_{i=0}^{deg_x} a_i x^i
/// ```
///
/// The constant zero polynomial is represented by a vector with one zero
/// element, rather than by an empty vector. Trailing zeros are kept, so a
/// polynomial recovered from k points always has k coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    pub(crate) a: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a polynomial initialized to zero.
    pub fn zero(deg: usize) -> Self {
        let a = vec![BigInt::zero(); deg + 1];
        Self { a }
    }

    /// Creates a polynomial with the given coefficients.
    pub fn with_coefficients(a: Vec<BigInt>) -> Self {
        if a.is_empty() {
            return Self::zero(0);
        }

        Self { a }
    }

    /// Returns the number of coefficients in the polynomial.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Returns the i-th coefficient of the polynomial.
    pub fn coefficient(&self, i: usize) -> Option<&BigInt> {
        self.a.get(i)
    }

    /// Returns all coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.a
    }

    /// Returns the coefficient `a_0` of the constant term.
    pub fn constant_term(&self) -> &BigInt {
        &self.a[0]
    }

    /// Evaluates the polynomial.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let xpows = powers(x, self.a.len() - 1);
        let mut r = BigInt::zero();
        for (ai, xpow) in self.a.iter().zip(xpows.iter()) {
            r += ai * xpow;
        }

        r
    }

    /// Returns the points of the polynomial at the given x-coordinates.
    pub fn points(&self, xs: &[BigInt]) -> Vec<Point> {
        xs.iter()
            .map(|x| Point::new(x.clone(), self.eval(x)))
            .collect()
    }

    /// Returns true iff the point lies on the polynomial.
    pub fn contains(&self, point: &Point) -> bool {
        self.eval(&point.x) == point.y
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero(0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ai) in self.a.iter().enumerate().rev() {
            if i != self.a.len() - 1 {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{}", ai)?,
                1 => write!(f, "{}*x", ai)?,
                _ => write!(f, "{}*x^{}", ai, i)?,
            }
        }
        Ok(())
    }
}
