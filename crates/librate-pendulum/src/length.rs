//! Pendulum length from a target period.
//!
//! The large-amplitude period is T = 2√(2L/g)·I(θmax). Solving for L gives
//! L = g·T²/(8·I²). The reference design computation for this pendulum
//! divides by I rather than I², giving L = g·T²/(8·I); the sample length
//! 2.1921755733 m (g = 9.8, T = 2, θmax = π/10) comes from that literal form.
//! Both are available through [`LengthFormula`], with the literal one as the
//! default.

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{PendulumError, Result};
use crate::params::positive;

/// Which closed-form rearrangement to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthFormula {
    /// L = g·T²/(8·I), the un-squared form of the reference computation.
    #[default]
    Literal,
    /// L = g·T²/(8·I²), the exact inverse of T = 2√(2L/g)·I.
    Physical,
}

/// Solves for the pendulum length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LengthSolver {
    formula: LengthFormula,
}

impl LengthSolver {
    /// Creates a solver using `formula`.
    pub fn new(formula: LengthFormula) -> Self {
        Self { formula }
    }

    /// Solver using [`LengthFormula::Physical`].
    pub fn physical() -> Self {
        Self::new(LengthFormula::Physical)
    }

    /// Formula in use.
    pub fn formula(&self) -> LengthFormula {
        self.formula
    }

    /// Computes L from gravity `g`, target period `period` and the period
    /// integral value `integral`.
    ///
    /// Fails with a domain error if `g` or `period` is not positive, if
    /// `integral` is negative or not finite, or if the length overflows, and
    /// with [`PendulumError::DivisionByZero`] if `integral` is zero.
    pub fn solve(&self, gravity: f64, period: f64, integral: f64) -> Result<f64> {
        let gravity = positive("gravity", gravity)?;
        let period = positive("period", period)?;
        if !integral.is_finite() || integral < 0.0 {
            return Err(PendulumError::domain(
                "integral",
                integral,
                "must be finite and non-negative",
            ));
        }
        if integral == 0.0 {
            return Err(PendulumError::DivisionByZero);
        }

        let denominator = match self.formula {
            LengthFormula::Literal => 8.0 * integral,
            LengthFormula::Physical => 8.0 * integral * integral,
        };
        let length = gravity * period * period / denominator;
        if !length.is_finite() {
            return Err(PendulumError::domain("length", length, "is not representable as f64"));
        }
        debug!(formula = ?self.formula, gravity, period, integral, length, "solved pendulum length");
        Ok(length)
    }

    /// Period T = 2√(2L/g)·I of a pendulum of length `length`.
    pub fn period(gravity: f64, length: f64, integral: f64) -> Result<f64> {
        let gravity = positive("gravity", gravity)?;
        let length = positive("length", length)?;
        let integral = positive("integral", integral)?;
        let period = 2.0 * (2.0 * length / gravity).sqrt() * integral;
        if !period.is_finite() {
            return Err(PendulumError::domain("period", period, "is not representable as f64"));
        }
        Ok(period)
    }
}

/// Small-angle period 2π√(L/g).
pub fn small_angle_period(gravity: f64, length: f64) -> Result<f64> {
    let gravity = positive("gravity", gravity)?;
    let length = positive("length", length)?;
    Ok(TAU * (length / gravity).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_INTEGRAL: f64 = 2.235_222_424_6;

    #[test]
    fn test_literal_formula_reproduces_reference_length() {
        let length = LengthSolver::default().solve(9.8, 2.0, SAMPLE_INTEGRAL).unwrap();
        assert!((length - 2.192_175_573_3).abs() < 1e-9);
    }

    #[test]
    fn test_physical_formula_differs_from_literal() {
        let literal = LengthSolver::new(LengthFormula::Literal).solve(9.8, 2.0, SAMPLE_INTEGRAL).unwrap();
        let physical = LengthSolver::physical().solve(9.8, 2.0, SAMPLE_INTEGRAL).unwrap();
        // L_physical = L_literal / I
        assert!((physical - literal / SAMPLE_INTEGRAL).abs() < 1e-12);
        assert!((physical - 0.980_741_580_4).abs() < 1e-9);
    }

    #[test]
    fn test_physical_round_trips_through_period() {
        let solver = LengthSolver::physical();
        let length = solver.solve(9.81, 3.5, SAMPLE_INTEGRAL).unwrap();
        let period = LengthSolver::period(9.81, length, SAMPLE_INTEGRAL).unwrap();
        assert!((period - 3.5).abs() < 1e-12);

        // the literal formula does not invert the period relation
        let literal = LengthSolver::default().solve(9.81, 3.5, SAMPLE_INTEGRAL).unwrap();
        let period = LengthSolver::period(9.81, literal, SAMPLE_INTEGRAL).unwrap();
        assert!((period - 3.5).abs() > 0.1);
    }

    #[test]
    fn test_small_angle_period() {
        // A 1 m pendulum under g = π² swings with a 2 s period.
        let period = small_angle_period(std::f64::consts::PI.powi(2), 1.0).unwrap();
        assert!((period - 2.0).abs() < 1e-14);
        assert!(small_angle_period(9.8, 0.0).is_err());
    }

    #[test]
    fn test_zero_integral_is_division_by_zero() {
        for formula in [LengthFormula::Literal, LengthFormula::Physical] {
            let err = LengthSolver::new(formula).solve(9.8, 2.0, 0.0).unwrap_err();
            assert_eq!(err, PendulumError::DivisionByZero);
        }
    }

    #[test]
    fn test_domain_errors() {
        let solver = LengthSolver::default();
        for (g, t, i, parameter) in [
            (0.0, 2.0, 1.0, "gravity"),
            (-9.8, 2.0, 1.0, "gravity"),
            (f64::NAN, 2.0, 1.0, "gravity"),
            (9.8, 0.0, 1.0, "period"),
            (9.8, -1.0, 1.0, "period"),
            (9.8, f64::INFINITY, 1.0, "period"),
            (9.8, 2.0, -1.0, "integral"),
            (9.8, 2.0, f64::NAN, "integral"),
        ] {
            let err = solver.solve(g, t, i).unwrap_err();
            assert!(
                matches!(err, PendulumError::Domain { parameter: p, .. } if p == parameter),
                "({g}, {t}, {i}): {err:?}"
            );
        }
    }

    #[test]
    fn test_overflowing_length_is_domain_error() {
        for formula in [LengthFormula::Literal, LengthFormula::Physical] {
            let err = LengthSolver::new(formula).solve(1e200, 1e200, 1.0).unwrap_err();
            assert!(
                matches!(err, PendulumError::Domain { parameter: "length", .. }),
                "{formula:?}: {err:?}"
            );
        }
        let err = LengthSolver::period(1e-300, 1e300, 1e10).unwrap_err();
        assert!(matches!(err, PendulumError::Domain { parameter: "period", .. }));
    }

    #[test]
    fn test_formula_accessor() {
        assert_eq!(LengthSolver::default().formula(), LengthFormula::Literal);
        assert_eq!(LengthSolver::physical().formula(), LengthFormula::Physical);
    }
}
