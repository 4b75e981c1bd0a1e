//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Holds the absolute tolerance and the iteration budget shared by the
/// bracketed solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 200);
///
/// let custom = SolverConfig {
///     tolerance: 1e-8,
///     max_iterations: 50,
/// };
/// assert!(custom.tolerance > config.tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Absolute convergence tolerance.
    ///
    /// The solver stops when `|f(x)| < tolerance` or when the half-width of
    /// the bracket falls to `tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Exhausting the budget yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Absolute tolerance `1e-12`, at most `200` iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap_or_else(T::epsilon),
            max_iterations: 200,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-10, 100);
    /// assert_eq!(config.max_iterations, 100);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns `true` when the tolerance is positive and finite and at least
    /// one iteration is allowed.
    ///
    /// Used to check configurations that arrive through deserialisation and
    /// therefore bypass [`SolverConfig::new`].
    pub fn is_valid(&self) -> bool {
        self.tolerance > T::zero() && self.tolerance.is_finite() && self.max_iterations > 0
    }
}
