//! The GJK algorithm for overlap detection between ground polygons.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::ground_simplex::{GroundSimplex, SimplexReduction};

mod cso_point;
mod gjk;
mod ground_simplex;
