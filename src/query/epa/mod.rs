//! The EPA algorithm for penetration depth computation.

pub use self::epa::EPA;
pub use self::polytope_edge::{closest_edge, PolytopeEdge};

mod epa;
mod polytope_edge;
