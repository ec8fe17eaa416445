//! Validated physical inputs.

use std::f64::consts::PI;

use crate::error::{PendulumError, Result};

/// Standard gravity used by the examples, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Maximum swing angle θmax from the vertical, in radians, guaranteed to lie
/// in the open interval (0, π).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amplitude(f64);

impl Amplitude {
    /// Validates θmax.
    pub fn new(theta_max: f64) -> Result<Self> {
        if theta_max.is_finite() && theta_max > 0.0 && theta_max < PI {
            Ok(Self(theta_max))
        } else {
            Err(PendulumError::domain(
                "theta_max",
                theta_max,
                "must lie strictly between 0 and π radians",
            ))
        }
    }

    /// Builds an amplitude from degrees.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        Self::new(degrees.to_radians())
    }

    /// θmax in radians.
    pub fn radians(self) -> f64 {
        self.0
    }

    /// θmax in degrees.
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl TryFrom<f64> for Amplitude {
    type Error = PendulumError;

    fn try_from(theta_max: f64) -> Result<Self> {
        Self::new(theta_max)
    }
}

/// Checks that a scalar is finite and strictly positive.
pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PendulumError::domain(parameter, value, "must be finite and positive"))
    }
}

/// The inputs of one pendulum design: gravity, target period and amplitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParams {
    gravity: f64,
    period: f64,
    amplitude: Amplitude,
}

impl PendulumParams {
    /// Validates all three inputs.
    pub fn new(gravity: f64, period: f64, theta_max: f64) -> Result<Self> {
        Ok(Self {
            gravity: positive("gravity", gravity)?,
            period: positive("period", period)?,
            amplitude: Amplitude::new(theta_max)?,
        })
    }

    /// Gravitational acceleration g in m/s².
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Target period T in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Swing amplitude.
    pub fn amplitude(&self) -> Amplitude {
        self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_range() {
        assert!(Amplitude::new(PI / 10.0).is_ok());
        assert!(Amplitude::new(PI - 1e-9).is_ok());
        for bad in [0.0, PI, -0.1, 4.0, f64::NAN, f64::INFINITY, -f64::INFINITY] {
            let err = Amplitude::new(bad).unwrap_err();
            assert!(err.is_domain(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_amplitude_degrees() {
        let amplitude = Amplitude::from_degrees(18.0).unwrap();
        assert!((amplitude.radians() - PI / 10.0).abs() < 1e-15);
        assert!((amplitude.degrees() - 18.0).abs() < 1e-12);
        assert!(Amplitude::from_degrees(180.0).is_err());
    }

    #[test]
    fn test_try_from() {
        let amplitude: Amplitude = 0.5_f64.try_into().unwrap();
        assert_eq!(amplitude.radians(), 0.5);
        assert!(Amplitude::try_from(-1.0).is_err());
    }

    #[test]
    fn test_params_validation() {
        let params = PendulumParams::new(STANDARD_GRAVITY, 2.0, PI / 10.0).unwrap();
        assert_eq!(params.gravity(), 9.8);
        assert_eq!(params.period(), 2.0);

        let err = PendulumParams::new(0.0, 2.0, 0.3).unwrap_err();
        assert!(matches!(err, PendulumError::Domain { parameter: "gravity", .. }));
        let err = PendulumParams::new(9.8, -2.0, 0.3).unwrap_err();
        assert!(matches!(err, PendulumError::Domain { parameter: "period", .. }));
        let err = PendulumParams::new(9.8, 2.0, PI).unwrap_err();
        assert!(matches!(err, PendulumError::Domain { parameter: "theta_max", .. }));
        assert!(PendulumParams::new(f64::NAN, 2.0, 0.3).is_err());
    }
}
