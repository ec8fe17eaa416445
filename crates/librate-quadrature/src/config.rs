//! Tolerances and budgets for the adaptive loop.

use crate::error::{QuadratureError, Result};

/// Options controlling adaptive integration.
///
/// The absolute default (`1.49e-8`, roughly `√ε` for `f64`) is the usual
/// QUADPACK driver default. The relative default is looser (`1e-7`) so that
/// inverse-square-root endpoint singularities away from the origin converge
/// above the roundoff floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute error tolerance.
    pub abs_tol: f64,
    /// Relative error tolerance.
    pub rel_tol: f64,
    /// Maximum number of bisections.
    pub max_subdivisions: usize,
    /// Number of geometrically graded subintervals seeded toward a
    /// singular point that sits on an endpoint.
    pub grading_levels: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1e-7,
            max_subdivisions: 200,
            grading_levels: 16,
        }
    }
}

impl QuadratureConfig {
    /// Sets the absolute tolerance.
    pub fn with_abs_tol(mut self, abs_tol: f64) -> Self {
        self.abs_tol = abs_tol;
        self
    }

    /// Sets the relative tolerance.
    pub fn with_rel_tol(mut self, rel_tol: f64) -> Self {
        self.rel_tol = rel_tol;
        self
    }

    /// Sets both tolerances at once.
    pub fn with_tolerance(self, tol: f64) -> Self {
        self.with_abs_tol(tol).with_rel_tol(tol)
    }

    /// Sets the bisection budget.
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    /// Sets the number of graded subintervals toward endpoint singularities.
    pub fn with_grading_levels(mut self, grading_levels: usize) -> Self {
        self.grading_levels = grading_levels;
        self
    }

    /// Tolerance target for a running estimate.
    pub(crate) fn tolerance_for(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }

    /// Checks that the options can drive the adaptive loop.
    pub fn validate(&self) -> Result<()> {
        let valid = |t: f64| t.is_finite() && t >= 0.0;
        if !valid(self.abs_tol) || !valid(self.rel_tol) {
            return Err(QuadratureError::InvalidTolerance(format!(
                "tolerances must be finite and non-negative (abs_tol = {}, rel_tol = {})",
                self.abs_tol, self.rel_tol
            )));
        }
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return Err(QuadratureError::InvalidTolerance(
                "abs_tol and rel_tol cannot both be zero".to_string(),
            ));
        }
        if self.max_subdivisions == 0 {
            return Err(QuadratureError::InvalidTolerance(
                "max_subdivisions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
