//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a successful bracketed root search.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::BrentSolver;
///
/// let solver: BrentSolver<f64> = BrentSolver::with_defaults();
/// let result = solver.solve(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
///
/// assert!((result.root - 2.0_f64.ln()).abs() < 1e-10);
/// assert!(result.iterations > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T: Float> {
    /// Abscissa where the search stopped.
    pub root: T,
    /// Number of iterations used (0 when an endpoint was already a root).
    pub iterations: usize,
    /// Function value at `root`.
    pub residual: T,
}

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Algorithm
///
/// Each iteration keeps a bracket `[b, c]` with `f(b)` and `f(c)` of
/// opposite sign, `b` being the best estimate so far:
/// - **Inverse quadratic interpolation** when three distinct points are known
/// - **Secant step** when only two are
/// - **Bisection** whenever the interpolated step would leave the bracket or
///   shrink too slowly
///
/// Convergence is declared when `|f(b)| < tolerance` or when the half-width
/// of the bracket is within `2·ε·|b| + tolerance / 2`.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::new(1e-12, 200));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration (`1e-12`, 200 iterations).
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (or that one of
    /// them is zero).
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root within tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.solve(f, a, b).map(|result| result.root)
    }

    /// Find a root of `f` in `[a, b]`, reporting iterations and residual.
    ///
    /// Same contract as [`BrentSolver::find_root`].
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;
        let tol = self.config.tolerance;

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa.is_nan() || fb.is_nan() {
            return Err(SolverError::NumericalInstability(format!(
                "function is NaN at bracket endpoint ({}, {})",
                to_f64(a),
                to_f64(b)
            )));
        }

        if fa * fb > zero {
            return Err(SolverError::NoBracket {
                a: to_f64(a),
                b: to_f64(b),
            });
        }

        if fa == zero {
            return Ok(RootResult {
                root: a,
                iterations: 0,
                residual: fa,
            });
        }
        if fb == zero {
            return Ok(RootResult {
                root: b,
                iterations: 0,
                residual: fb,
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for iteration in 1..=self.config.max_iterations {
            // Re-establish the bracket [b, c] after the previous step
            if (fb > zero && fc > zero) || (fb < zero && fc < zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // b must hold the smallest residual
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol_step = two * T::epsilon() * b.abs() + half * tol;
            let midpoint = half * (c - b);

            if fb.abs() < tol || midpoint.abs() <= tol_step {
                return Ok(RootResult {
                    root: b,
                    iterations: iteration,
                    residual: fb,
                });
            }

            if e.abs() >= tol_step && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // Secant
                    (two * midpoint * s, one - s)
                } else {
                    // Inverse quadratic interpolation
                    let qa = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * midpoint * qa * (qa - r) - (b - a) * (r - one)),
                        (qa - one) * (r - one) * (s - one),
                    )
                };

                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let limit_interp = three * midpoint * q - (tol_step * q).abs();
                let limit_prev = (e * q).abs();

                if two * p < limit_interp.min(limit_prev) {
                    e = d;
                    d = p / q;
                } else {
                    d = midpoint;
                    e = d;
                }
            } else {
                d = midpoint;
                e = d;
            }

            a = b;
            fa = fb;

            b = if d.abs() > tol_step {
                b + d
            } else {
                b + tol_step * midpoint.signum()
            };
            fb = f(b);

            if fb.is_nan() {
                return Err(SolverError::NumericalInstability(format!(
                    "function is NaN at x = {}",
                    to_f64(b)
                )));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
