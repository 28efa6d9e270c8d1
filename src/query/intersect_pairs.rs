use alloc::vec::Vec;

use crate::math::{Point, Real};
use crate::query::{intersect_with_options, GjkEpaOptions, Penetration, QueryError};

/// A pair of ground polygons given to [`intersect_pairs`].
pub type PolygonPair<'a> = (&'a [Point<Real>], &'a [Point<Real>]);

/// Runs [`intersect_with_options`] on each pair of polygons.
///
/// The result at index `i` is the result for `pairs[i]`; a failing pair does not prevent
/// the others from being evaluated. With the `parallel` feature enabled, the pairs are
/// distributed over the global `rayon` thread pool.
pub fn intersect_pairs(
    pairs: &[PolygonPair<'_>],
    options: &GjkEpaOptions,
) -> Vec<Result<Option<Penetration>, QueryError>> {
    #[cfg(feature = "parallel")]
    use rayon::prelude::*;

    #[cfg(feature = "parallel")]
    let pairs = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let pairs = pairs.iter();

    pairs
        .map(|(shape1, shape2)| intersect_with_options(shape1, shape2, options))
        .collect()
}
