//! Algebraic endpoint weights.
//!
//! Integrals of the form
//!
//! $$\int_a^b f(x)\,(x-a)^{\alpha}\,(b-x)^{\beta}\,dx, \qquad \alpha, \beta > -1$$
//!
//! where `f` is smooth. The weight is removed analytically with a power
//! substitution at each singular endpoint. Near `b`, with `p = 1 + β`:
//!
//! $$u = (b-x)^{p}, \qquad (b-x)^{\beta}\,dx = -\frac{du}{p}$$
//!
//! so the piece becomes `(1/p) ∫ f(b - u^{1/p}) (x-a)^α du`, a smooth
//! integrand on `[0, (b-c)^p]`. The lower endpoint is handled the same way.
//! When both exponents are non-zero the interval is split at its midpoint.

use tracing::debug;

use crate::adaptive::{adaptive_integrate_with_singularities, check_interval, QuadratureResult};
use crate::config::QuadratureConfig;
use crate::error::{QuadratureError, Result};

/// The weight `(x - a)^alpha (b - x)^beta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlgebraicWeight {
    /// Exponent at the lower endpoint `a`.
    pub alpha: f64,
    /// Exponent at the upper endpoint `b`.
    pub beta: f64,
}

impl AlgebraicWeight {
    /// Creates a weight, rejecting exponents that make it non-integrable.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let weight = Self { alpha, beta };
        weight.validate()?;
        Ok(weight)
    }

    /// Weight singular at the lower endpoint only: `(x - a)^alpha`.
    pub fn lower(alpha: f64) -> Result<Self> {
        Self::new(alpha, 0.0)
    }

    /// Weight singular at the upper endpoint only: `(b - x)^beta`.
    pub fn upper(beta: f64) -> Result<Self> {
        Self::new(0.0, beta)
    }

    /// Checks `alpha, beta > -1`.
    pub fn validate(&self) -> Result<()> {
        let ok = |e: f64| e.is_finite() && e > -1.0;
        if ok(self.alpha) && ok(self.beta) {
            Ok(())
        } else {
            Err(QuadratureError::InvalidWeight {
                alpha: self.alpha,
                beta: self.beta,
            })
        }
    }

    /// Evaluates the weight at `x` for the interval [a, b].
    pub fn value_at(&self, a: f64, b: f64, x: f64) -> f64 {
        power(x - a, self.alpha) * power(b - x, self.beta)
    }

    /// Returns true if the weight is identically one.
    pub fn is_trivial(&self) -> bool {
        self.alpha == 0.0 && self.beta == 0.0
    }
}

/// `base^exponent` with `0^0 = 1` and negative rounding noise clamped to zero.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        1.0
    } else {
        base.max(0.0).powf(exponent)
    }
}

/// Which endpoint a substitution removes.
#[derive(Clone, Copy, Debug)]
enum Endpoint {
    Lower,
    Upper,
}

/// Integrates `f(x) * other_factor(x)` over [lo, hi] after removing the
/// algebraic factor at one endpoint of the full interval [a, b].
#[allow(clippy::too_many_arguments)]
fn integrate_piece<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    lo: f64,
    hi: f64,
    weight: AlgebraicWeight,
    endpoint: Endpoint,
    singular_points: &[f64],
    config: &QuadratureConfig,
) -> Result<QuadratureResult> {
    let (exponent, anchor, span) = match endpoint {
        Endpoint::Lower => (weight.alpha, a, hi - a),
        Endpoint::Upper => (weight.beta, b, b - lo),
    };
    let p = 1.0 + exponent;
    let inv_p = 1.0 / p;
    let to_u = |x: f64| (x - anchor).abs().powf(p);

    let g = |u: f64| {
        let distance = u.powf(inv_p);
        match endpoint {
            Endpoint::Lower => {
                let x = (anchor + distance).min(hi);
                f(x) * power(b - x, weight.beta)
            }
            Endpoint::Upper => {
                let x = (anchor - distance).max(lo);
                f(x) * power(x - a, weight.alpha)
            }
        }
    };

    let mapped: Vec<f64> = singular_points
        .iter()
        .filter(|&&s| s > lo && s < hi)
        .map(|&s| to_u(s))
        .collect();

    // The u-space result is divided by p, so the absolute target tightens by p.
    let inner = config.with_abs_tol(config.abs_tol * p);
    let result = adaptive_integrate_with_singularities(&g, 0.0, span.powf(p), &mapped, &inner)?;
    Ok(result.scaled(inv_p))
}

/// Integrates `f(x) (x-a)^alpha (b-x)^beta` over [a, b].
///
/// `f` is evaluated at interior points only. Singular points of `f` itself
/// that lie strictly inside (a, b) are honoured as breakpoints after the
/// substitution.
///
/// # Example
///
/// ```
/// use librate_quadrature::{integrate_weighted, AlgebraicWeight, QuadratureConfig};
///
/// // ∫₀¹ (1-x)^(-1/2) dx = 2
/// let weight = AlgebraicWeight::upper(-0.5).unwrap();
/// let result = integrate_weighted(&|_| 1.0, 0.0, 1.0, weight, &[], &QuadratureConfig::default()).unwrap();
/// assert!((result.value - 2.0).abs() < 1e-12);
/// ```
pub fn integrate_weighted<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    weight: AlgebraicWeight,
    singular_points: &[f64],
    config: &QuadratureConfig,
) -> Result<QuadratureResult> {
    check_interval(a, b)?;
    weight.validate()?;
    config.validate()?;

    debug!(a, b, alpha = weight.alpha, beta = weight.beta, "weighted quadrature");

    match (weight.alpha == 0.0, weight.beta == 0.0) {
        (true, true) => adaptive_integrate_with_singularities(f, a, b, singular_points, config),
        (true, false) => integrate_piece(f, a, b, a, b, weight, Endpoint::Upper, singular_points, config),
        (false, true) => integrate_piece(f, a, b, a, b, weight, Endpoint::Lower, singular_points, config),
        (false, false) => {
            let mid = (a + b) / 2.0;
            let half = config.with_abs_tol(config.abs_tol / 2.0);
            let left = integrate_piece(f, a, b, a, mid, weight, Endpoint::Lower, singular_points, &half)?;
            let right = integrate_piece(f, a, b, mid, b, weight, Endpoint::Upper, singular_points, &half)?;
            Ok(left.combine(right))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn config() -> QuadratureConfig {
        QuadratureConfig::default().with_tolerance(1e-12)
    }

    #[test]
    fn test_upper_inverse_sqrt() {
        // ∫₀¹ (1-x)^(-1/2) dx = 2
        let weight = AlgebraicWeight::upper(-0.5).unwrap();
        let result = integrate_weighted(&|_| 1.0, 0.0, 1.0, weight, &[], &config()).unwrap();
        assert!((result.value - 2.0).abs() < 1e-12);
        assert!(result.error < 1e-12);
    }

    #[test]
    fn test_lower_inverse_sqrt_with_smooth_factor() {
        // ∫₀¹ cos(x) x^(-1/2) dx = √(2π) C(√(2/π)) ≈ 1.8090484758005438
        let weight = AlgebraicWeight::lower(-0.5).unwrap();
        let result = integrate_weighted(&|x: f64| x.cos(), 0.0, 1.0, weight, &[], &config()).unwrap();
        assert!((result.value - 1.809_048_475_800_543_8).abs() < 1e-10);
    }

    #[test]
    fn test_both_endpoints_chebyshev() {
        // ∫₋₁¹ (1+x)^(-1/2) (1-x)^(-1/2) dx = π
        let weight = AlgebraicWeight::new(-0.5, -0.5).unwrap();
        let result = integrate_weighted(&|_| 1.0, -1.0, 1.0, weight, &[], &config()).unwrap();
        assert!((result.value - PI).abs() < 1e-10);
    }

    #[test]
    fn test_beta_function() {
        // ∫₀¹ x^(1/2) (1-x)^(-1/3) dx = B(3/2, 2/3) = Γ(3/2)Γ(2/3)/Γ(13/6)
        let weight = AlgebraicWeight::new(0.5, -1.0 / 3.0).unwrap();
        let result = integrate_weighted(&|_| 1.0, 0.0, 1.0, weight, &[], &config()).unwrap();
        assert!((result.value - 1.108_761_239_669_910_5).abs() < 1e-9);
    }

    #[test]
    fn test_trivial_weight_is_plain_integration() {
        let weight = AlgebraicWeight::new(0.0, 0.0).unwrap();
        assert!(weight.is_trivial());
        let result = integrate_weighted(&|x: f64| x * x, 0.0, 3.0, weight, &[], &config()).unwrap();
        assert!((result.value - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_integrable_weight() {
        assert!(matches!(
            AlgebraicWeight::upper(-1.0),
            Err(QuadratureError::InvalidWeight { beta, .. }) if beta == -1.0
        ));
        assert!(AlgebraicWeight::lower(-2.5).is_err());
        assert!(AlgebraicWeight::new(f64::NAN, 0.0).is_err());

        let bad = AlgebraicWeight { alpha: 0.0, beta: -1.5 };
        let result = integrate_weighted(&|_| 1.0, 0.0, 1.0, bad, &[], &config());
        assert!(matches!(result, Err(QuadratureError::InvalidWeight { .. })));
    }

    #[test]
    fn test_value_at() {
        let weight = AlgebraicWeight::new(1.0, -0.5).unwrap();
        assert!((weight.value_at(0.0, 1.0, 0.75) - 0.75 / 0.5).abs() < 1e-15);
        assert_eq!(AlgebraicWeight::upper(-0.5).unwrap().value_at(0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_absolute_tolerance_holds_after_substitution() {
        // The substitution scales the result by 1/(1+β) = 10 here.
        let weight = AlgebraicWeight::upper(-0.9).unwrap();
        let f = |x: f64| (30.0 * x).sin();
        let loose = QuadratureConfig::default().with_abs_tol(1e-6).with_rel_tol(0.0);
        let result = integrate_weighted(&f, 0.0, 1.0, weight, &[], &loose).unwrap();
        assert!(result.error <= 1e-6, "error estimate {}", result.error);

        let tight = integrate_weighted(&f, 0.0, 1.0, weight, &[], &QuadratureConfig::default().with_tolerance(1e-13)).unwrap();
        assert!((result.value - tight.value).abs() <= 1e-6);
    }

    #[test]
    fn test_never_evaluates_at_singular_endpoint() {
        let weight = AlgebraicWeight::upper(-0.5).unwrap();
        let f = |x: f64| {
            assert!(x < 1.0, "evaluated at the weighted endpoint");
            1.0 + x
        };
        // ∫₀¹ (1+x)(1-x)^(-1/2) dx = 2 + 4/3
        let result = integrate_weighted(&f, 0.0, 1.0, weight, &[], &config()).unwrap();
        assert!((result.value - 10.0 / 3.0).abs() < 1e-12);
    }
}
