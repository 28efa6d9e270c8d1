use crate::math::{Point, Real};
use crate::query::epa::EPA;
use crate::query::gjk::{self, GJKResult};
use crate::query::{GjkEpaOptions, Penetration, QueryError, ShapeSlot};
use crate::shape::GroundPolygon;

/// Tests two ground polygons for overlap and, if they overlap, computes their penetration.
///
/// Uses the default [`GjkEpaOptions`]. See [`intersect_with_options`].
pub fn intersect(
    shape1: &[Point<Real>],
    shape2: &[Point<Real>],
) -> Result<Option<Penetration>, QueryError> {
    intersect_with_options(shape1, shape2, &GjkEpaOptions::default())
}

/// Tests two ground polygons for overlap and, if they overlap, computes their penetration.
///
/// Both shapes are the vertex lists of convex polygons in the ground plane; their `y`
/// coordinates are ignored.
///
/// Returns:
/// - `Ok(None)` if the polygons are apart, or touching without any penetration.
/// - `Ok(Some(penetration))` if they overlap. Translating `shape1` by
///   [`penetration.separation_a()`](Penetration::separation_a) separates them.
/// - `Err(_)` if a polygon is empty or has non-finite coordinates, or if GJK or EPA
///   exceeded their iteration limit.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use groundgjk::math::Point;
/// use groundgjk::query::{self, GjkEpaOptions};
///
/// let square = |x: f32, z: f32| {
///     [
///         Point::new(x - 0.5, 0.0, z - 0.5),
///         Point::new(x + 0.5, 0.0, z - 0.5),
///         Point::new(x + 0.5, 0.0, z + 0.5),
///         Point::new(x - 0.5, 0.0, z + 0.5),
///     ]
/// };
/// let options = GjkEpaOptions::default();
///
/// assert_eq!(query::intersect_with_options(&square(0.0, 0.0), &square(10.0, 0.0), &options), Ok(None));
///
/// let penetration = query::intersect_with_options(&square(0.0, 0.0), &square(0.0, 0.75), &options)
///     .unwrap()
///     .unwrap();
/// assert!((penetration.depth - 0.25).abs() < 1.0e-3);
/// assert!((penetration.normal.z - 1.0).abs() < 1.0e-3);
/// # }
/// ```
pub fn intersect_with_options(
    shape1: &[Point<Real>],
    shape2: &[Point<Real>],
    options: &GjkEpaOptions,
) -> Result<Option<Penetration>, QueryError> {
    let g1 = GroundPolygon::validated(shape1, ShapeSlot::First)?;
    let g2 = GroundPolygon::validated(shape2, ShapeSlot::Second)?;
    let max_iterations = options.gjk_iteration_limit(shape1.len(), shape2.len());

    match gjk::enclose_origin(&g1, &g2, max_iterations)? {
        GJKResult::NoIntersection => Ok(None),
        GJKResult::Intersection(simplex) => EPA::new()
            .penetration(&g1, &g2, &simplex, options)
            .map(Some),
    }
}
