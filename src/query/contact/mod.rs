//! Implementation details of the `intersect` function.

pub use self::intersect_polygon_polygon::{intersect, intersect_with_options};
pub use self::penetration::Penetration;

mod intersect_polygon_polygon;
mod penetration;
