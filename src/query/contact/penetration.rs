use crate::math::{Real, UnitVector, Vector};

/// The penetration of two overlapping ground polygons.
///
/// `normal` is the outward normal of the Minkowski difference `a - b` at its boundary
/// point closest to the origin: it points from the first shape toward the second one.
/// Translating the first shape by `-normal * depth` (see [`Penetration::separation_a`])
/// brings both shapes into touching contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// How deep the shapes are overlapping along `normal`. Never negative.
    pub depth: Real,
    /// The unit penetration direction, from the first shape toward the second one.
    pub normal: UnitVector<Real>,
}

impl Penetration {
    /// Creates a new penetration record.
    #[inline]
    pub fn new(depth: Real, normal: UnitVector<Real>) -> Self {
        Penetration { depth, normal }
    }

    /// The same penetration, described with the roles of both shapes swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Penetration {
            depth: self.depth,
            normal: -self.normal,
        }
    }

    /// The translation of the first shape that resolves this penetration.
    #[inline]
    pub fn separation_a(&self) -> Vector<Real> {
        -*self.normal * self.depth
    }

    /// The translation of the second shape that resolves this penetration.
    #[inline]
    pub fn separation_b(&self) -> Vector<Real> {
        *self.normal * self.depth
    }
}
