//! Error types for the pendulum computations.

use librate_quadrature::QuadratureError;
use thiserror::Error;

/// Errors that can occur while evaluating the period integral or solving
/// for a length.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PendulumError {
    /// An input lies outside its physical range.
    #[error("{parameter} = {value} is out of range: {reason}")]
    Domain {
        /// Name of the offending input.
        parameter: &'static str,
        /// Value supplied.
        value: f64,
        /// Accepted range.
        reason: &'static str,
    },

    /// The period integral evaluated to exactly zero.
    #[error("division by zero: period integral is 0")]
    DivisionByZero,

    /// Propagated unchanged from the quadrature primitive.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

impl PendulumError {
    pub(crate) fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        PendulumError::Domain {
            parameter,
            value,
            reason,
        }
    }

    /// Returns true for out-of-range inputs.
    pub fn is_domain(&self) -> bool {
        matches!(self, PendulumError::Domain { .. })
    }

    /// Returns true when the quadrature gave up before meeting its tolerance.
    pub fn is_nonconvergence(&self) -> bool {
        matches!(self, PendulumError::Quadrature(e) if e.is_nonconvergence())
    }
}

/// Result type for pendulum computations.
pub type Result<T> = std::result::Result<T, PendulumError>;
