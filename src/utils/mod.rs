//! Various unsorted geometrical and logical operators.

pub use self::ground_perp::{ground_edge_normal, ground_perp, ground_perp_dot};
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::winding::ground_signed_area;

mod ground_perp;
mod point_cloud_support_point;
mod winding;
