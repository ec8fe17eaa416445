//! Errors raised by the quadrature primitive.

use thiserror::Error;

/// Errors that can occur while integrating.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum QuadratureError {
    /// The bounds are not finite or not ordered `a < b`.
    #[error("invalid integration interval [{a}, {b}]")]
    InvalidInterval {
        /// Lower bound as supplied.
        a: f64,
        /// Upper bound as supplied.
        b: f64,
    },

    /// Tolerances or the subdivision budget cannot drive the adaptive loop.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Algebraic weight exponents must both exceed -1 for the weight to be integrable.
    #[error("non-integrable algebraic weight: alpha = {alpha}, beta = {beta} (both must exceed -1)")]
    InvalidWeight {
        /// Exponent at the lower endpoint.
        alpha: f64,
        /// Exponent at the upper endpoint.
        beta: f64,
    },

    /// The integrand returned NaN or an infinity at a quadrature node.
    #[error("integrand is not finite at x = {x}")]
    NonFiniteValue {
        /// Node at which the integrand was evaluated.
        x: f64,
    },

    /// The subdivision budget ran out before the tolerance was met.
    #[error(
        "no convergence after {subdivisions} subdivisions: \
         estimate {value} with error {error} exceeds tolerance {tolerance}"
    )]
    NonConvergence {
        /// Best estimate reached.
        value: f64,
        /// Error estimate of that value.
        error: f64,
        /// Tolerance that was requested.
        tolerance: f64,
        /// Bisections performed.
        subdivisions: usize,
    },

    /// A subinterval became too narrow to bisect in floating point.
    #[error("roundoff limit reached on [{a}, {b}]: estimate {value} with error {error}")]
    RoundoffLimit {
        /// Lower bound of the offending subinterval.
        a: f64,
        /// Upper bound of the offending subinterval.
        b: f64,
        /// Best estimate reached.
        value: f64,
        /// Error estimate of that value.
        error: f64,
    },
}

impl QuadratureError {
    /// Returns true when the primitive gave up on refinement
    /// (budget exhausted or roundoff floor reached).
    pub fn is_nonconvergence(&self) -> bool {
        matches!(
            self,
            QuadratureError::NonConvergence { .. } | QuadratureError::RoundoffLimit { .. }
        )
    }
}

/// Result type for quadrature routines.
pub type Result<T> = std::result::Result<T, QuadratureError>;
