use num_bigint::BigInt;

/// A point (x,y) on a univariate polynomial f(x), where y = f(x).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// The x-coordinate of the point.
    pub(crate) x: BigInt,
    /// The y-coordinate of the point.
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
