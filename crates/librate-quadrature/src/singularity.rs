//! Endpoint singularity probing.
//!
//! Estimates the order α of a power-law blow-up |f(x)| ~ C/|x - s|^α by
//! sampling at geometrically shrinking distances and fitting the log-log
//! slope. Used to confirm that a singular point is integrable (α < 1) before
//! choosing a weight exponent for it.

/// Classification of singularity behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SingularityKind {
    /// Bounded near the point (removable or no singularity).
    Bounded,
    /// Integrable power-law blow-up (α < 1), e.g. 1/√x at 0.
    Integrable,
    /// α ≈ 1: logarithmically divergent.
    SimplePole,
    /// α > 1: divergent.
    HigherOrderPole,
    /// Not enough finite samples to decide.
    Unknown,
}

/// Result of sampling near a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularityInfo {
    /// Location sampled.
    pub location: f64,
    /// Classification.
    pub kind: SingularityKind,
    /// Estimated order α, if one could be fitted.
    pub order: Option<f64>,
}

impl SingularityInfo {
    /// Returns true if a weight `|x - s|^(-order)` would be integrable.
    pub fn is_integrable(&self) -> bool {
        matches!(self.kind, SingularityKind::Bounded | SingularityKind::Integrable)
    }
}

const SAMPLE_DISTANCES: [f64; 6] = [1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7];

/// Samples `f` near `x`, approaching from the left or the right.
///
/// Distances are relative to `scale` (typically the interval length), so the
/// samples stay inside the interval of interest.
pub fn classify_singularity<F: Fn(f64) -> f64>(
    f: &F,
    x: f64,
    scale: f64,
    approach_from_left: bool,
) -> SingularityInfo {
    let sign = if approach_from_left { -1.0 } else { 1.0 };

    let samples: Vec<(f64, f64)> = SAMPLE_DISTANCES
        .iter()
        .filter_map(|&eps| {
            let distance = eps * scale;
            let value = f(x + sign * distance).abs();
            (value.is_finite() && value > 0.0).then(|| (distance.ln(), value.ln()))
        })
        .collect();

    if samples.len() < 3 {
        return SingularityInfo {
            location: x,
            kind: SingularityKind::Unknown,
            order: None,
        };
    }

    // ln|f| ~ ln C - α ln ε, so the slope against ln ε is -α.
    let (first, last) = (samples[0], samples[samples.len() - 1]);
    let alpha = -(last.1 - first.1) / (last.0 - first.0);

    let kind = if alpha < 0.05 {
        SingularityKind::Bounded
    } else if alpha < 0.95 {
        SingularityKind::Integrable
    } else if alpha <= 1.05 {
        SingularityKind::SimplePole
    } else {
        SingularityKind::HigherOrderPole
    };

    SingularityInfo {
        location: x,
        kind,
        order: Some(alpha),
    }
}
