//! End-to-end pendulum design: parameters → period integral → length.

use tracing::info;

use crate::error::Result;
use crate::evaluator::{IntegralResult, SingularIntegralEvaluator, Strategy};
use crate::length::LengthSolver;
use crate::params::PendulumParams;

/// A solved design.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumDesign {
    /// Inputs the design was solved for.
    pub params: PendulumParams,
    /// Period integral used.
    pub integral: IntegralResult,
    /// Pendulum length in metres.
    pub length: f64,
}

/// Evaluates I(θmax) with `strategy`, then solves for the length.
///
/// Every input is validated before any quadrature runs.
pub fn design_pendulum(
    params: &PendulumParams,
    strategy: Strategy,
    evaluator: &SingularIntegralEvaluator,
    solver: &LengthSolver,
) -> Result<PendulumDesign> {
    let integral = evaluator.evaluate_amplitude(params.amplitude(), strategy)?;
    let length = solver.solve(params.gravity(), params.period(), integral.value)?;
    info!(
        gravity = params.gravity(),
        period = params.period(),
        theta_max = params.amplitude().radians(),
        %strategy,
        length,
        "pendulum designed"
    );
    Ok(PendulumDesign {
        params: *params,
        integral,
        length,
    })
}
