//! # Librate
//!
//! Design a pendulum for a target period, at amplitudes where the
//! small-angle formula is no longer good enough.
//!
//! The period of a pendulum released from rest at angle θmax depends on the
//! singular integral
//!
//! $$I(\theta_{max}) = \int_0^{\theta_{max}} \frac{d\theta}{\sqrt{\cos\theta - \cos\theta_{max}}}$$
//!
//! which this workspace evaluates three ways and then inverts for the length.
//!
//! ## Features
//!
//! - **Adaptive Quadrature**: G7K15 with global error control and a roundoff floor
//! - **Singular-Point Hints**: graded meshes toward known singularities
//! - **Algebraic Weights**: `(x-a)^α (b-x)^β` factored out by substitution
//! - **Pendulum Design**: period integral, length inversion, closed-form oracle
//!
//! ## Quick Start
//!
//! ```rust
//! use librate::prelude::*;
//!
//! let params = PendulumParams::new(STANDARD_GRAVITY, 2.0, std::f64::consts::PI / 10.0).unwrap();
//! let design = design_pendulum(
//!     &params,
//!     Strategy::Weighted,
//!     &SingularIntegralEvaluator::default(),
//!     &LengthSolver::default(),
//! )
//! .unwrap();
//! assert!((design.length - 2.1921755733).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use librate_pendulum as pendulum;
pub use librate_quadrature as quadrature;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use librate_pendulum::{
        design_pendulum, reference_integral, Amplitude, EvaluatorConfig, IntegralResult, LengthFormula,
        LengthSolver, PendulumDesign, PendulumError, PendulumParams, SingularIntegralEvaluator, Strategy,
        StrategyComparison, STANDARD_GRAVITY,
    };
    pub use librate_quadrature::{AlgebraicWeight, Quadrature, QuadratureConfig, QuadratureError, QuadratureResult};
}
