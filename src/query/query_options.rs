use crate::math::Real;

/// Number of GJK iterations allowed per input vertex when no explicit limit is set.
pub const GJK_ITERATIONS_PER_VERTEX: usize = 4;
/// Lower bound of the GJK iteration limit derived from the vertex counts.
pub const GJK_MIN_ITERATIONS: usize = 32;

/// Parameters of the GJK and EPA iterations.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use groundgjk::query::GjkEpaOptions;
///
/// let options = GjkEpaOptions {
///     epa_tolerance: 1.0e-3,
///     ..GjkEpaOptions::default()
/// };
/// assert_eq!(options.gjk_iteration_limit(4, 4), 32);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkEpaOptions {
    /// Maximum number of support points GJK may add before giving up.
    ///
    /// If `None`, the limit is derived from the vertex counts of the two shapes,
    /// see [`GjkEpaOptions::gjk_iteration_limit`].
    pub gjk_max_iterations: Option<usize>,
    /// Maximum number of polytope expansions EPA may perform before giving up.
    pub epa_max_iterations: usize,
    /// EPA stops once a new support point extends the closest edge by less than this distance.
    ///
    /// This is an absolute distance: tune it to the coordinate scale of the shapes.
    pub epa_tolerance: Real,
}

impl Default for GjkEpaOptions {
    fn default() -> Self {
        Self {
            gjk_max_iterations: None,
            epa_max_iterations: 100,
            epa_tolerance: 0.01,
        }
    }
}

impl GjkEpaOptions {
    /// The GJK iteration limit for shapes with `nvertices1` and `nvertices2` vertices.
    pub fn gjk_iteration_limit(&self, nvertices1: usize, nvertices2: usize) -> usize {
        self.gjk_max_iterations.unwrap_or_else(|| {
            GJK_MIN_ITERATIONS.max(
                GJK_ITERATIONS_PER_VERTEX.saturating_mul(nvertices1.saturating_add(nvertices2)),
            )
        })
    }
}
