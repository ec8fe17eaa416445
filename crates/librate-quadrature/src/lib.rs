//! Adaptive Quadrature for Endpoint-Singular Integrands
//!
//! This crate provides the numerical primitive behind the pendulum period
//! integral: adaptive Gauss-Kronrod quadrature that can be told where an
//! integrand is singular, or handed an algebraic weight to factor out.
//!
//! # Available Methods
//!
//! - **Adaptive Integration**: G7K15 with global error control
//! - **Singular-Point Hints**: breakpoints and graded meshes at known singularities
//! - **Algebraic Weights**: `(x-a)^α (b-x)^β` removed by power substitution
//! - **Singularity Probing**: log-log estimate of a blow-up's order
//!
//! # Example
//!
//! ```
//! use librate_quadrature::{adaptive_integrate, QuadratureConfig};
//!
//! let config = QuadratureConfig::default().with_tolerance(1e-12);
//! let result = adaptive_integrate(&|x: f64| 1.0 / (1.0 + x * x), -10.0, 10.0, &config).unwrap();
//! println!("∫₋₁₀¹⁰ 1/(1+x²) dx ≈ {} ± {}", result.value, result.error);
//! assert!((result.value - 2.0 * 10.0_f64.atan()).abs() < 1e-10);
//! ```

pub mod adaptive;
pub mod builder;
pub mod config;
pub mod error;
pub mod gauss_kronrod;
pub mod singularity;
pub mod weighted;

mod proptests;

pub use adaptive::{adaptive_integrate, adaptive_integrate_with_singularities, QuadratureResult};
pub use builder::Quadrature;
pub use config::QuadratureConfig;
pub use error::{QuadratureError, Result};
pub use gauss_kronrod::{GaussKronrodRule, RuleEstimate};
pub use singularity::{classify_singularity, SingularityInfo, SingularityKind};
pub use weighted::{integrate_weighted, AlgebraicWeight};
