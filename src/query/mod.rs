//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersect()`](intersect) to test two ground polygons for overlap and compute their
//!   penetration depth and direction.
//! * [`query::intersection_test()`](intersection_test) to only determine whether two ground
//!   polygons overlap.
//! * [`query::intersect_pairs()`](intersect_pairs) to run many independent `intersect` queries
//!   at once, in parallel with the `parallel` feature.
//!
//! # Algorithms
//! The [`gjk`] and [`epa`] modules expose the building blocks of these queries: the CSO
//! support function, the simplex reduction, the closest-edge search and the
//! polytope expansion.

pub use self::contact::{intersect, intersect_with_options, Penetration};
pub use self::error::{QueryError, QueryStage, ShapeSlot};
#[cfg(feature = "alloc")]
pub use self::intersect_pairs::{intersect_pairs, PolygonPair};
pub use self::intersection_test::intersection_test;
pub use self::query_options::{GjkEpaOptions, GJK_ITERATIONS_PER_VERTEX, GJK_MIN_ITERATIONS};

mod contact;
pub mod epa;
mod error;
pub mod gjk;
#[cfg(feature = "alloc")]
mod intersect_pairs;
mod query_options;
