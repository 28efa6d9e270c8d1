//! The Gilbert-Johnson-Keerthi overlap test, restricted to the ground plane.
//!
//! GJK works on the **Minkowski difference** (also called Configuration Space Obstacle or CSO)
//! of two convex shapes: the shapes overlap if, and only if, their CSO contains the origin.
//! Instead of computing the CSO explicitly, GJK grows a simplex of CSO support points toward
//! the origin until the simplex either encloses the origin or a support point proves that the
//! whole CSO lies on one side of a line that leaves the origin on the other side.
//!
//! In the ground plane the simplex is at most a triangle, so the enclosing simplex returned
//! on success can be handed directly to [EPA](crate::query::epa::EPA).

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, GroundSimplex, SimplexReduction};
use crate::query::{QueryError, QueryStage};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are overlapping.
    ///
    /// The triangle of CSO points encloses the origin, boundary included.
    Intersection(GroundSimplex),
    /// The shapes are apart, or only touching without any penetration.
    NoIntersection,
}

/// The absolute tolerance used by the GJK algorithm.
///
/// The returned value is 10 times the default machine epsilon for the current floating-point
/// precision (f32 or f64).
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 10.0
}

/// The direction of the first support point computed by [`enclose_origin`].
pub fn seed_direction() -> Vector<Real> {
    Vector::new(1.0, 0.0, 1.0)
}

/// Searches a triangle of CSO points of `g1` and `g2` enclosing the origin.
///
/// At most `max_iterations` support points are added after the initial one. Exceeding
/// this budget is reported as a [`QueryError::NoConvergence`] error, which can only happen
/// with degenerate geometries.
pub fn enclose_origin<G1, G2>(
    g1: &G1,
    g2: &G2,
    max_iterations: usize,
) -> Result<GJKResult, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol = eps_tol();
    let mut dir = seed_direction();
    let mut simplex = GroundSimplex::new(CSOPoint::from_shapes(g1, g2, &dir));
    dir = -dir;

    for niter in 0..max_iterations {
        let cso_point = CSOPoint::from_shapes(g1, g2, &dir);

        if cso_point.point.coords.dot(&dir) < 0.0 {
            // `dir` is a separating axis.
            log::trace!("GJK: separating axis found after {} iterations.", niter + 1);
            return Ok(GJKResult::NoIntersection);
        }

        if simplex.contains_point(&cso_point) {
            // No progress: the origin is at best on the boundary of the CSO.
            log::debug!("GJK: support point already in the simplex, the shapes are touching.");
            return Ok(GJKResult::NoIntersection);
        }

        simplex.push(cso_point);

        match simplex.reduce() {
            SimplexReduction::Contained(enclosing) => {
                log::trace!("GJK: origin enclosed after {} iterations.", niter + 1);
                return Ok(GJKResult::Intersection(enclosing));
            }
            SimplexReduction::Continue {
                simplex: reduced,
                dir: new_dir,
            } => {
                if new_dir.norm_squared() <= _eps_tol * _eps_tol {
                    // The CSO point coincides with the origin.
                    log::debug!("GJK: degenerate search direction, the shapes are touching.");
                    return Ok(GJKResult::NoIntersection);
                }

                simplex = reduced;
                dir = new_dir;
            }
        }
    }

    log::debug!(
        "GJK: no convergence after {} iterations, the input polygons are likely degenerate.",
        max_iterations
    );
    Err(QueryError::NoConvergence {
        stage: QueryStage::Gjk,
        iterations: max_iterations,
    })
}
