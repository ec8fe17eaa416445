//! Large-Amplitude Pendulum Period and Length
//!
//! A pendulum released from rest at angle θmax has period
//!
//! $$T = 2\sqrt{\frac{2L}{g}}\; I(\theta_{max}), \qquad
//!   I(\theta_{max}) = \int_0^{\theta_{max}} \frac{d\theta}{\sqrt{\cos\theta - \cos\theta_{max}}}$$
//!
//! The integrand blows up like (θmax − θ)^(−1/2) at the upper limit. This
//! crate evaluates I(θmax) with three interchangeable quadrature strategies
//! and inverts the period relation for the length L.
//!
//! # Quick Start
//!
//! ```
//! use librate_pendulum::{LengthSolver, SingularIntegralEvaluator, Strategy};
//!
//! let evaluator = SingularIntegralEvaluator::default();
//! let integral = evaluator.evaluate(std::f64::consts::PI / 10.0, Strategy::Weighted).unwrap();
//! let length = LengthSolver::default().solve(9.8, 2.0, integral.value).unwrap();
//! assert!((length - 2.1921755733).abs() < 1e-8);
//! ```
//!
//! # Features
//!
//! - **Three strategies**: naive adaptive, singular-point hint, weighted
//! - **Closed-form oracle**: I(θmax) = √2·K(sin(θmax/2)) via the AGM
//! - **Two length formulas**: the literal reference one and the exact inverse

pub mod design;
pub mod elliptic;
pub mod error;
pub mod evaluator;
pub mod integrand;
pub mod length;
pub mod params;

mod proptests;

pub use design::{design_pendulum, PendulumDesign};
pub use elliptic::{complete_elliptic_k, reference_integral};
pub use error::{PendulumError, Result};
pub use evaluator::{EvaluatorConfig, IntegralResult, SingularIntegralEvaluator, Strategy, StrategyComparison};
pub use integrand::{endpoint_limit, Integrand, RegularizedIntegrand};
pub use length::{small_angle_period, LengthFormula, LengthSolver};
pub use params::{Amplitude, PendulumParams, STANDARD_GRAVITY};
