use na::ComplexField;

use crate::math::{Real, UnitVector, Vector};

/// Rotates `v` by 90 degrees inside of the ground plane.
///
/// The vector `(x, y, z)` is mapped to `(-z, 0, x)`. Every perpendicular used by
/// the GJK and EPA implementations of this crate goes through this function so
/// that they all agree on the same rotation sense.
#[inline]
pub fn ground_perp(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-v.z, 0.0, v.x)
}

/// The planar cross product of `a` and `b`, i.e., `ground_perp(a).dot(b)`.
///
/// Positive when `b` is obtained by rotating `a` in the same sense as [`ground_perp`].
#[inline]
pub fn ground_perp_dot(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.x * b.z - a.z * b.x
}

/// The unit perpendicular of the oriented segment `[a, b]`, as given by [`ground_perp`].
///
/// Returns `None` if the segment is degenerate or if its length is not finite. The
/// perpendicular is rescaled by its largest component before normalization so that
/// long segments do not overflow.
#[inline]
pub fn ground_edge_normal(a: &Vector<Real>, b: &Vector<Real>) -> Option<UnitVector<Real>> {
    let perp = ground_perp(&(b - a));
    let scale = ComplexField::abs(perp.x).max(ComplexField::abs(perp.z));

    if !scale.is_finite() || scale <= crate::math::DEFAULT_EPSILON {
        return None;
    }

    UnitVector::try_new(perp / scale, crate::math::DEFAULT_EPSILON)
}
