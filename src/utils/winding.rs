use crate::math::{Point, Real};
use crate::utils::ground_perp_dot;

/// Twice the signed area of the closed polygon `points` projected on the ground plane.
///
/// The result is positive when the polygon turns in the rotation sense of
/// [`ground_perp`](crate::utils::ground_perp), negative when it turns the other way,
/// and zero for flat or empty polygons.
pub fn ground_signed_area<'a>(points: impl IntoIterator<Item = &'a Point<Real>>) -> Real {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return 0.0;
    };

    let mut area = 0.0;
    let mut prev = first;

    for p in points {
        area += ground_perp_dot(&prev.coords, &p.coords);
        prev = p;
    }

    area + ground_perp_dot(&prev.coords, &first.coords)
}
