//! Closed-form reference for the period integral.
//!
//! With sin(θ/2) = k sin φ and k = sin(θmax/2),
//!
//! $$\int_0^{\theta_{max}} \frac{d\theta}{\sqrt{\cos\theta - \cos\theta_{max}}} = \sqrt{2}\,K(k)$$
//!
//! where K is the complete elliptic integral of the first kind,
//! K(k) = π / (2 · AGM(1, √(1 − k²))).

use std::f64::consts::{FRAC_PI_2, SQRT_2};

use crate::params::Amplitude;

/// Arithmetic-geometric mean of two positive numbers.
pub fn agm(mut a: f64, mut b: f64) -> f64 {
    // Convergence is quadratic; 64 rounds is far more than f64 needs.
    for _ in 0..64 {
        if (a - b).abs() <= f64::EPSILON * a {
            break;
        }
        let next_a = (a + b) / 2.0;
        b = (a * b).sqrt();
        a = next_a;
    }
    a
}

/// Complete elliptic integral of the first kind K(k) for modulus 0 ≤ k < 1.
///
/// Returns +∞ at k = 1 and NaN outside [0, 1].
pub fn complete_elliptic_k(k: f64) -> f64 {
    if !(0.0..=1.0).contains(&k) {
        return f64::NAN;
    }
    if k == 1.0 {
        return f64::INFINITY;
    }
    FRAC_PI_2 / agm(1.0, (1.0 - k * k).sqrt())
}

/// Exact value of I(θmax) = √2 · K(sin(θmax/2)).
pub fn reference_integral(amplitude: Amplitude) -> f64 {
    SQRT_2 * complete_elliptic_k((amplitude.radians() / 2.0).sin())
}
