use arrayvec::ArrayVec;

use crate::math::{Real, Vector};
use crate::query::gjk::{self, CSOPoint};
use crate::utils;

/// A simplex of the ground plane: a point, a segment, or a triangle of CSO points.
///
/// The most recently added point is always the last one.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundSimplex {
    points: ArrayVec<CSOPoint, 3>,
}

/// The outcome of [`GroundSimplex::reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimplexReduction {
    /// The simplex is a triangle enclosing the origin (boundary included).
    Contained(GroundSimplex),
    /// The origin is not enclosed yet.
    Continue {
        /// The simplex with the vertex that cannot contribute to enclosing the origin removed.
        simplex: GroundSimplex,
        /// The direction toward the origin in which the next support point must be searched.
        dir: Vector<Real>,
    },
}

impl GroundSimplex {
    /// Creates a simplex made of a single point.
    pub fn new(pt: CSOPoint) -> Self {
        let mut points = ArrayVec::new();
        points.push(pt);
        GroundSimplex { points }
    }

    /// The points of this simplex, the most recently added one last.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The dimension of this simplex: 0 for a point, 1 for a segment, 2 for a triangle.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.points.len() - 1
    }

    /// Checks if `pt` is (approximately) one of the vertices of this simplex.
    ///
    /// Only the ground coordinates are compared.
    pub fn contains_point(&self, pt: &CSOPoint) -> bool {
        let _eps_tol = gjk::eps_tol();
        self.points.iter().any(|p| {
            relative_eq!(p.point.x, pt.point.x, epsilon = _eps_tol)
                && relative_eq!(p.point.z, pt.point.z, epsilon = _eps_tol)
        })
    }

    /// Adds a point to this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is already a triangle.
    pub fn push(&mut self, pt: CSOPoint) {
        self.points.push(pt);
    }

    /// Decides whether this simplex encloses the origin and, if it does not, reduces it to the
    /// feature closest to the origin and computes the next search direction.
    ///
    /// Only the ground coordinates are considered. The returned direction is never
    /// oriented away from the origin.
    pub fn reduce(self) -> SimplexReduction {
        let a = self.points[self.points.len() - 1];
        let ao = -a.point.coords;

        match self.points.len() {
            3 => {
                let b = self.points[0];
                let c = self.points[1];
                let ab = b - a;
                let ac = c - a;

                let mut ab_perp = utils::ground_perp(&ab);
                if ab_perp.dot(&ac) >= 0.0 {
                    ab_perp = -ab_perp;
                }

                if ab_perp.dot(&ao) > 0.0 {
                    // The origin is outside of the edge [a, b].
                    return SimplexReduction::Continue {
                        simplex: Self::segment(b, a),
                        dir: ab_perp,
                    };
                }

                let mut ac_perp = utils::ground_perp(&ac);
                if ac_perp.dot(&ab) >= 0.0 {
                    ac_perp = -ac_perp;
                }

                if ac_perp.dot(&ao) <= 0.0 {
                    SimplexReduction::Contained(self)
                } else {
                    SimplexReduction::Continue {
                        simplex: Self::segment(c, a),
                        dir: ac_perp,
                    }
                }
            }
            2 => {
                let b = self.points[0];
                let mut ab_perp = utils::ground_perp(&(b - a));

                if ab_perp.norm_squared() <= gjk::eps_tol() * gjk::eps_tol() {
                    // Both points coincide: search toward the origin from the newest one.
                    return SimplexReduction::Continue {
                        simplex: GroundSimplex::new(a),
                        dir: Vector::new(ao.x, 0.0, ao.z),
                    };
                }

                if ab_perp.dot(&ao) < 0.0 {
                    ab_perp = -ab_perp;
                }

                SimplexReduction::Continue {
                    simplex: self,
                    dir: ab_perp,
                }
            }
            _ => SimplexReduction::Continue {
                simplex: self,
                dir: Vector::new(ao.x, 0.0, ao.z),
            },
        }
    }

    fn segment(older: CSOPoint, newer: CSOPoint) -> Self {
        let mut points = ArrayVec::new();
        points.push(older);
        points.push(newer);
        GroundSimplex { points }
    }
}
