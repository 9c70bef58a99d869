use std::slice;

use crate::{errors::Error, poly::Point};

/// A set of points with distinct x-coordinates, sorted ascending by x.
///
/// The ordering is total and exact, so selecting the first k points gives
/// the same selection regardless of the order in which the points were
/// supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a new point set.
    ///
    /// Fails if two points share the same x-coordinate.
    pub fn new(mut points: Vec<Point>) -> Result<Self, Error> {
        points.sort_by(|a, b| a.x.cmp(&b.x));

        if let Some(w) = points.windows(2).find(|w| w[0].x == w[1].x) {
            return Err(Error::DuplicateX { x: w[0].x.clone() });
        }

        Ok(Self { points })
    }

    /// Returns the first k points, ordered by x.
    pub fn first_k(&self, k: usize) -> Result<&[Point], Error> {
        if k == 0 {
            return Err(Error::InvalidThreshold);
        }
        if self.points.len() < k {
            return Err(Error::InsufficientPoints {
                required: k,
                available: self.points.len(),
            });
        }

        Ok(&self.points[..k])
    }

    /// Returns the points that follow the first k points.
    pub fn remaining(&self, k: usize) -> &[Point] {
        self.points.get(k..).unwrap_or(&[])
    }

    /// Returns all points, ordered by x.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns an iterator over the points, ordered by x.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true iff the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
