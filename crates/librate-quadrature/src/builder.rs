//! One entry point for the optional quadrature arguments.
//!
//! ```
//! use librate_quadrature::{AlgebraicWeight, Quadrature};
//!
//! // ∫₀¹ dx / √(1 - x), once with a hint and once with the weight
//! let hinted = Quadrature::new(0.0, 1.0)
//!     .singular_points(&[1.0])
//!     .integrate(&|x: f64| 1.0 / (1.0 - x).sqrt())
//!     .unwrap();
//! let weighted = Quadrature::new(0.0, 1.0)
//!     .weight(AlgebraicWeight::upper(-0.5).unwrap())
//!     .integrate(&|_| 1.0)
//!     .unwrap();
//! assert!((hinted.value - 2.0).abs() < 1e-6);
//! assert!((weighted.value - 2.0).abs() < 1e-12);
//! ```

use crate::adaptive::{adaptive_integrate_with_singularities, QuadratureResult};
use crate::config::QuadratureConfig;
use crate::error::Result;
use crate::weighted::{integrate_weighted, AlgebraicWeight};

/// A pending quadrature over [lower, upper].
#[derive(Clone, Debug)]
pub struct Quadrature {
    lower: f64,
    upper: f64,
    singular_points: Vec<f64>,
    weight: Option<AlgebraicWeight>,
    config: QuadratureConfig,
}

impl Quadrature {
    /// Starts a quadrature over [lower, upper] with default options.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            singular_points: Vec::new(),
            weight: None,
            config: QuadratureConfig::default(),
        }
    }

    /// Declares points where the integrand is known to be singular.
    pub fn singular_points(mut self, points: &[f64]) -> Self {
        self.singular_points.extend_from_slice(points);
        self
    }

    /// Factors an algebraic endpoint weight out of the integrand.
    pub fn weight(mut self, weight: AlgebraicWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Replaces the adaptive options.
    pub fn config(mut self, config: QuadratureConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the quadrature on `f`.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: &F) -> Result<QuadratureResult> {
        match self.weight {
            Some(weight) => integrate_weighted(
                f,
                self.lower,
                self.upper,
                weight,
                &self.singular_points,
                &self.config,
            ),
            None => adaptive_integrate_with_singularities(
                f,
                self.lower,
                self.upper,
                &self.singular_points,
                &self.config,
            ),
        }
    }
}
