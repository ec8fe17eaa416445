//! The pendulum period integrand and its desingularized form.
//!
//! For amplitude θmax the quarter-period integral is
//!
//! $$I(\theta_{max}) = \int_0^{\theta_{max}} \frac{d\theta}{\sqrt{\cos\theta - \cos\theta_{max}}}$$
//!
//! The denominator is evaluated as
//!
//! $$\cos\theta - \cos\theta_{max} = 2 \sin\frac{\theta_{max}+\theta}{2} \sin\frac{\theta_{max}-\theta}{2}$$
//!
//! which keeps full relative precision as θ → θmax, where the direct
//! difference of cosines cancels catastrophically. The square root is taken
//! of each factor separately, so the product never underflows even for
//! amplitudes near the bottom of the f64 range.

use crate::params::Amplitude;

/// √(cos θ − cos θmax), accurate near θ = θmax and for tiny θmax.
fn sqrt_cosine_gap(theta: f64, theta_max: f64) -> f64 {
    (2.0 * ((theta_max + theta) / 2.0).sin()).sqrt() * ((theta_max - theta) / 2.0).sin().sqrt()
}

/// θ ↦ 1/√(cos θ − cos θmax) on [0, θmax).
///
/// Returns +∞ at θmax and NaN beyond it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrand {
    theta_max: f64,
}

impl Integrand {
    /// Binds the integrand to an amplitude.
    pub fn new(amplitude: Amplitude) -> Self {
        Self {
            theta_max: amplitude.radians(),
        }
    }

    /// Upper limit of integration.
    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }

    /// Evaluates the integrand.
    pub fn eval(&self, theta: f64) -> f64 {
        1.0 / sqrt_cosine_gap(theta, self.theta_max)
    }
}

/// θ ↦ √(θmax − θ) / √(cos θ − cos θmax), extended continuously to θmax.
///
/// Near θmax, cos θ − cos θmax ≈ sin θmax · (θmax − θ), so the limit at the
/// endpoint is 1/√(sin θmax).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularizedIntegrand {
    theta_max: f64,
    limit: f64,
}

impl RegularizedIntegrand {
    /// Binds the regularized integrand to an amplitude.
    pub fn new(amplitude: Amplitude) -> Self {
        Self {
            theta_max: amplitude.radians(),
            limit: endpoint_limit(amplitude),
        }
    }

    /// Upper limit of integration.
    pub fn theta_max(&self) -> f64 {
        self.theta_max
    }

    /// Value at θ = θmax.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Evaluates the regularized integrand.
    pub fn eval(&self, theta: f64) -> f64 {
        let distance = self.theta_max - theta;
        if distance == 0.0 {
            return self.limit;
        }
        distance.sqrt() / sqrt_cosine_gap(theta, self.theta_max)
    }
}

/// lim_{θ→θmax} √(θmax − θ) / √(cos θ − cos θmax) = 1/√(sin θmax).
pub fn endpoint_limit(amplitude: Amplitude) -> f64 {
    1.0 / amplitude.radians().sin().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sample() -> Amplitude {
        Amplitude::new(PI / 10.0).unwrap()
    }

    #[test]
    fn test_integrand_matches_direct_formula_away_from_endpoint() {
        let integrand = Integrand::new(sample());
        for theta in [0.0_f64, 0.05, 0.1, 0.2, 0.3] {
            let direct = 1.0 / (theta.cos() - (PI / 10.0).cos()).sqrt();
            assert!((integrand.eval(theta) - direct).abs() < 1e-9 * direct);
        }
    }

    #[test]
    fn test_integrand_singular_at_endpoint() {
        let integrand = Integrand::new(sample());
        assert_eq!(integrand.eval(PI / 10.0), f64::INFINITY);
        assert!(integrand.eval(PI / 10.0 + 0.01).is_nan());
        assert!(integrand.eval(PI / 10.0 - 1e-12).is_finite());
    }

    #[test]
    fn test_limit_for_pi_over_ten() {
        // sin(π/10) = (√5 − 1)/4
        let expected = 2.0 / (5.0_f64.sqrt() - 1.0).sqrt();
        assert!((endpoint_limit(sample()) - expected).abs() < 1e-14);
    }

    #[test]
    fn test_regularized_converges_to_limit() {
        let regularized = RegularizedIntegrand::new(sample());
        let limit = regularized.limit();
        let theta_max = regularized.theta_max();

        assert!((regularized.eval(theta_max - 1e-6) - limit).abs() < 1e-3);

        let gaps: Vec<f64> = [1e-2_f64, 1e-4, 1e-6, 1e-8]
            .iter()
            .map(|&eps| (regularized.eval(theta_max - eps) - limit).abs())
            .collect();
        for pair in gaps.windows(2) {
            assert!(pair[1] < pair[0], "gap did not shrink: {gaps:?}");
        }
        assert!(gaps[3] < 1e-7);
    }

    #[test]
    fn test_regularized_exact_endpoint_uses_limit() {
        let regularized = RegularizedIntegrand::new(sample());
        assert_eq!(regularized.eval(regularized.theta_max()), regularized.limit());
    }

    #[test]
    fn test_limit_general_amplitudes() {
        for theta_max in [0.01, 0.5, 1.0, 2.0, 3.0] {
            let amplitude = Amplitude::new(theta_max).unwrap();
            let regularized = RegularizedIntegrand::new(amplitude);
            let near = regularized.eval(theta_max - 1e-7);
            assert!(
                (near - regularized.limit()).abs() < 1e-5 * regularized.limit(),
                "θmax = {theta_max}: {near} vs {}",
                regularized.limit()
            );
        }
    }

    #[test]
    fn test_tiny_amplitude_stays_finite() {
        // I(θmax) → π/√2 as θmax → 0, with integrand values of order 1/θmax.
        for theta_max in [1e-160, 1e-200, 1e-300] {
            let amplitude = Amplitude::new(theta_max).unwrap();
            let integrand = Integrand::new(amplitude);
            let at_zero = integrand.eval(0.0) * theta_max;
            assert!((at_zero - std::f64::consts::SQRT_2).abs() < 1e-12, "θmax = {theta_max}: {at_zero}");

            let regularized = RegularizedIntegrand::new(amplitude);
            let mid = regularized.eval(theta_max / 2.0);
            assert!(mid.is_finite() && mid > 0.0, "θmax = {theta_max}: {mid}");
        }
    }

    #[test]
    fn test_regularized_is_product_form() {
        let amplitude = sample();
        let integrand = Integrand::new(amplitude);
        let regularized = RegularizedIntegrand::new(amplitude);
        for theta in [0.0_f64, 0.1, 0.25] {
            let product = (PI / 10.0 - theta).sqrt() * integrand.eval(theta);
            assert!((regularized.eval(theta) - product).abs() < 1e-12);
        }
    }
}
