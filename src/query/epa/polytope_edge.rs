use num::Bounded;

use crate::math::{Real, UnitVector, Vector};
use crate::query::gjk::{self, CSOPoint};
use crate::utils;

/// The edge of an EPA polytope closest to the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolytopeEdge {
    /// Signed distance from the origin to the edge, along `normal`.
    pub distance: Real,
    /// Index of the second vertex of the edge, i.e., where a vertex splitting this edge must
    /// be inserted to keep the polytope a simple polygon.
    pub index: usize,
    /// Outward unit normal of the edge.
    pub normal: UnitVector<Real>,
}

/// Finds the edge of the closed polygon `polygon` closest to the origin.
///
/// The polygon is closed implicitly: its last vertex is connected to its first one.
/// Each edge normal is oriented away from the origin. When the origin lies on the line
/// supporting an edge, that rule is undefined and the outward side is deduced from the
/// winding of the polygon instead. Degenerate (zero-length) edges are ignored and the first
/// edge reaching the minimal distance wins ties.
///
/// Returns `None` if the polygon has no non-degenerate edge.
pub fn closest_edge(polygon: &[CSOPoint]) -> Option<PolytopeEdge> {
    let winding = utils::ground_signed_area(polygon.iter().map(|pt| &pt.point));
    let mut best_dist = <Real as Bounded>::max_value();
    let mut best_edge = None;

    for i in 0..polygon.len() {
        let j = if i + 1 == polygon.len() { 0 } else { i + 1 };
        let a = &polygon[i].point.coords;
        let b = &polygon[j].point.coords;

        let Some(mut normal) = utils::ground_edge_normal(a, b) else {
            continue;
        };

        let origin_side = normal.dot(&-a);
        let scale = Vector::new(a.x, 0.0, a.z).norm().max(1.0);
        let on_edge_line = abs_diff_eq!(origin_side, 0.0, epsilon = gjk::eps_tol() * scale);

        let flip = if on_edge_line && winding != 0.0 {
            winding > 0.0
        } else {
            origin_side >= 0.0
        };

        if flip {
            normal = -normal;
        }

        let dist = normal.dot(a);

        if !dist.is_finite() {
            continue;
        }

        if dist < best_dist {
            best_dist = dist;
            best_edge = Some(PolytopeEdge {
                distance: dist,
                index: j,
                normal,
            });
        }
    }

    best_edge
}
