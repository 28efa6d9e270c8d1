use na::ComplexField;

use crate::math::{Point, Real, Vector, MAX_COORDINATE};
use crate::query::{QueryError, ShapeSlot};
use crate::shape::SupportMap;
use crate::utils;

/// A convex polygon lying on the ground plane, borrowed from its owner.
///
/// Only the `x` and `z` coordinates of the vertices are meaningful. Neither
/// convexity nor winding is checked: the support function only needs the
/// vertex set, and a non-convex input is treated as its convex hull.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundPolygon<'a> {
    points: &'a [Point<Real>],
}

impl<'a> GroundPolygon<'a> {
    /// Wraps the given vertices into a polygon.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: &'a [Point<Real>]) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(GroundPolygon { points })
        }
    }

    /// Wraps the given vertices into a polygon after checking they can be given to a query.
    ///
    /// Non-finite coordinates are reported before out-of-range ones.
    ///
    /// `slot` identifies the polygon in the returned error, if any.
    pub fn validated(points: &'a [Point<Real>], slot: ShapeSlot) -> Result<Self, QueryError> {
        let polygon = Self::new(points).ok_or(QueryError::EmptyShape(slot))?;

        if let Some(index) = polygon.first_non_finite() {
            return Err(QueryError::NonFiniteVertex { shape: slot, index });
        }

        if let Some(index) = polygon.first_out_of_range() {
            return Err(QueryError::CoordinateOutOfRange { shape: slot, index });
        }

        Ok(polygon)
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &'a [Point<Real>] {
        self.points
    }

    /// The index of the first vertex with a NaN or infinite coordinate, if any.
    ///
    /// The `y` coordinate is checked too: even if it is ignored by the queries, a NaN
    /// would leak into their dot products.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
    }

    /// The index of the first vertex with a coordinate larger than [`MAX_COORDINATE`]
    /// in magnitude, if any.
    pub fn first_out_of_range(&self) -> Option<usize> {
        self.points.iter().position(|p| {
            p.coords
                .iter()
                .any(|c| ComplexField::abs(*c) > MAX_COORDINATE)
        })
    }
}

impl SupportMap for GroundPolygon<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.points)
    }
}
