//! Pendulum length for a target period at large amplitude.
//!
//! Run with: cargo run -p librate --example pendulum_length -- [g] [T] [θmax]
//!
//! Defaults are g = 9.8 m/s², T = 2 s and θmax = π/10. Set `RUST_LOG=debug`
//! to see every quadrature run.

use std::error::Error;
use std::f64::consts::PI;

use tracing_subscriber::EnvFilter;

use librate::prelude::*;
use librate::pendulum::small_angle_period;

fn arg(args: &[String], index: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match args.get(index) {
        Some(raw) => Ok(raw.parse::<f64>().map_err(|e| format!("argument {index} ({raw:?}): {e}"))?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let params = PendulumParams::new(
        arg(&args, 1, STANDARD_GRAVITY)?,
        arg(&args, 2, 2.0)?,
        arg(&args, 3, PI / 10.0)?,
    )?;

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          Librate: Large-Amplitude Pendulum Design          ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");
    println!(
        "  g = {} m/s², T = {} s, θmax = {:.6} rad ({:.2}°)\n",
        params.gravity(),
        params.period(),
        params.amplitude().radians(),
        params.amplitude().degrees()
    );

    let evaluator = SingularIntegralEvaluator::default();
    let exact = reference_integral(params.amplitude());

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Period integral I(θmax)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    println!("  {:<14} {:>20} {:>12} {:>12} {:>8}", "strategy", "value", "error est.", "|Δ ref|", "evals");
    for strategy in Strategy::ALL {
        match evaluator.evaluate_amplitude(params.amplitude(), strategy) {
            Ok(result) => println!(
                "  {:<14} {:>20.15} {:>12.3e} {:>12.3e} {:>8}",
                strategy.to_string(),
                result.value,
                result.error_estimate,
                (result.value - exact).abs(),
                result.evaluations
            ),
            Err(err) => println!("  {:<14} failed: {err}", strategy.to_string()),
        }
    }
    println!("  {:<14} {:>20.15}   (√2·K(sin(θmax/2)) via AGM)\n", "reference", exact);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Length L");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    for (label, solver) in [
        ("literal  gT²/(8I) ", LengthSolver::new(LengthFormula::Literal)),
        ("physical gT²/(8I²)", LengthSolver::new(LengthFormula::Physical)),
    ] {
        let design = design_pendulum(&params, Strategy::Weighted, &evaluator, &solver)?;
        let period = LengthSolver::period(params.gravity(), design.length, design.integral.value)?;
        let small = small_angle_period(params.gravity(), design.length)?;
        println!(
            "  {label}: L = {:.10} m  (period {:.6} s, small-angle {:.6} s)",
            design.length, period, small
        );
    }
    println!();

    Ok(())
}
