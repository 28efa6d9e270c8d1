//! Penetration depth queries in the ground plane using the Expanding Polytope Algorithm.

use na::ComplexField;
use smallvec::SmallVec;

use crate::query::epa::closest_edge;
use crate::query::gjk::{CSOPoint, GroundSimplex};
use crate::query::{GjkEpaOptions, Penetration, QueryError, QueryStage};
use crate::shape::SupportMap;

/// The Expanding Polytope Algorithm in the ground plane.
///
/// EPA starts from a simplex enclosing the origin (as returned by
/// [`enclose_origin`](crate::query::gjk::enclose_origin)) and repeatedly:
///
/// 1. finds the polytope edge closest to the origin,
/// 2. computes the CSO support point along that edge's outward normal,
/// 3. stops if the support point does not push the edge outward by more than
///    [`GjkEpaOptions::epa_tolerance`], otherwise splits the edge with it.
///
/// The `EPA` structure can be reused across multiple queries to avoid allocations.
#[derive(Default)]
pub struct EPA {
    polytope: SmallVec<[CSOPoint; 16]>,
}

impl EPA {
    /// Creates a new instance of the ground-plane Expanding Polytope Algorithm.
    pub fn new() -> Self {
        EPA::default()
    }

    fn reset(&mut self) {
        self.polytope.clear();
    }

    /// The polytope built by the last call to [`EPA::penetration`].
    pub fn polytope(&self) -> &[CSOPoint] {
        &self.polytope
    }

    /// Computes the penetration of `g1` into `g2`.
    ///
    /// The `simplex` must enclose the origin. The returned normal is the outward normal
    /// of the CSO `g1 - g2` at its boundary point closest to the origin, so it points
    /// from `g1` toward `g2`.
    pub fn penetration<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &GroundSimplex,
        options: &GjkEpaOptions,
    ) -> Result<Penetration, QueryError>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();
        self.polytope.extend(simplex.points().iter().copied());

        for niter in 0..options.epa_max_iterations {
            let Some(edge) = closest_edge(&self.polytope) else {
                log::debug!("EPA: the polytope has no valid edge, the simplex is degenerate.");
                return Err(QueryError::NoConvergence {
                    stage: QueryStage::Epa,
                    iterations: niter,
                });
            };

            let cso_point = CSOPoint::from_shapes_toward(g1, g2, &edge.normal);
            let dist = cso_point.point.coords.dot(&edge.normal);

            if ComplexField::abs(dist - edge.distance) < options.epa_tolerance {
                log::trace!("EPA: converged after {} iterations.", niter + 1);
                let depth = if dist < 0.0 {
                    log::debug!(
                        "EPA: converged on an edge facing the origin (distance {}), clamping the depth to zero.",
                        dist
                    );
                    0.0
                } else {
                    dist
                };
                return Ok(Penetration::new(depth, edge.normal));
            }

            self.polytope.insert(edge.index, cso_point);
        }

        log::debug!(
            "EPA: no convergence after {} iterations, consider increasing the tolerance.",
            options.epa_max_iterations
        );
        Err(QueryError::NoConvergence {
            stage: QueryStage::Epa,
            iterations: options.epa_max_iterations,
        })
    }
}
