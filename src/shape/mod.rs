//! Shapes supported by groundgjk.

pub use self::ground_polygon::GroundPolygon;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ground_polygon;
mod support_map;
