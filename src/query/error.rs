use core::fmt;

/// Identifies one of the two shapes given to a query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeSlot {
    /// The first shape, `a` in `intersect(a, b)`.
    First,
    /// The second shape, `b` in `intersect(a, b)`.
    Second,
}

impl fmt::Display for ShapeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeSlot::First => f.pad("first shape"),
            ShapeSlot::Second => f.pad("second shape"),
        }
    }
}

/// The iterative stage of a query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum QueryStage {
    /// The Gilbert-Johnson-Keerthi overlap test.
    Gjk,
    /// The Expanding Polytope Algorithm computing the penetration.
    Epa,
}

impl fmt::Display for QueryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStage::Gjk => f.pad("GJK"),
            QueryStage::Epa => f.pad("EPA"),
        }
    }
}

/// Error returned by the queries of this crate.
///
/// A query that determines the shapes are apart is not an error: it returns
/// `Ok(None)` (or `Ok(false)`). Errors are reserved to inputs the algorithms
/// cannot work with and to iterations that did not settle within their budget.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use groundgjk::math::Point;
/// use groundgjk::query::{self, QueryError, ShapeSlot};
///
/// let square = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 1.0),
/// ];
///
/// assert_eq!(
///     query::intersect(&square, &[]),
///     Err(QueryError::EmptyShape(ShapeSlot::Second))
/// );
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum QueryError {
    /// One of the shapes has no vertex.
    #[error("the {0} has no vertex")]
    EmptyShape(ShapeSlot),
    /// A vertex has a NaN or infinite ground coordinate.
    #[error("vertex {index} of the {shape} has a non-finite coordinate")]
    NonFiniteVertex {
        /// The shape containing the invalid vertex.
        shape: ShapeSlot,
        /// The index of the invalid vertex.
        index: usize,
    },
    /// A vertex has a coordinate larger than [`MAX_COORDINATE`](crate::math::MAX_COORDINATE)
    /// in magnitude.
    #[error("vertex {index} of the {shape} has a coordinate out of the supported range")]
    CoordinateOutOfRange {
        /// The shape containing the invalid vertex.
        shape: ShapeSlot,
        /// The index of the invalid vertex.
        index: usize,
    },
    /// An iterative stage reached its iteration limit.
    ///
    /// This happens on degenerate inputs (flat or zero-area polygons, nearly
    /// parallel edges) where the exact convergence criterion cannot be met.
    #[error("{stage} did not converge after {iterations} iterations")]
    NoConvergence {
        /// The stage that failed to converge.
        stage: QueryStage,
        /// The number of iterations performed.
        iterations: usize,
    },
}
