/*!
groundgjk
========

**groundgjk** detects overlaps between convex polygons lying on the ground
plane (the `x`/`z` plane, `y` is ignored) and computes the penetration depth
and direction needed to separate them.

The narrow phase is a planar Gilbert-Johnson-Keerthi test followed, when the
shapes overlap, by the Expanding Polytope Algorithm:

```
# #[cfg(feature = "f32")] {
use groundgjk::math::Point;
use groundgjk::query;

let a = [
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 1.0),
    Point::new(0.0, 0.0, 1.0),
];
let b = a.map(|p| Point::new(p.x + 0.7, 0.0, p.z));

let penetration = query::intersect(&a, &b).unwrap().expect("the squares overlap");
assert!((penetration.depth - 0.3).abs() < 1.0e-3);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
///
/// Points and vectors are three-dimensional so they interoperate with 3D scenes,
/// but every query of this crate only reads their `x` and `z` coordinates.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The largest coordinate magnitude accepted by the queries.
    ///
    /// Squared norms of sums and differences of such coordinates stay finite,
    /// which the support, normal and winding computations rely on.
    #[cfg(feature = "f32")]
    pub const MAX_COORDINATE: Real = 1.0e15;

    /// The largest coordinate magnitude accepted by the queries.
    ///
    /// Squared norms of sums and differences of such coordinates stay finite,
    /// which the support, normal and winding computations rely on.
    #[cfg(feature = "f64")]
    pub const MAX_COORDINATE: Real = 1.0e150;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
