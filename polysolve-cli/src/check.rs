//! Executable versions of the documented example equations.

use log::info;
use polysolve_core::{roots::Roots, Complex64, Silent, Solver, SolverConfig};

pub struct Example {
    pub name: &'static str,
    pub coeffs: &'static [f64],
    pub expected: Vec<Complex64>,
    pub degenerate: bool,
}

pub fn examples() -> Vec<Example> {
    let w = 3f64.sqrt() / 2.;
    let c = Complex64::new;
    vec![
        Example { name: "x² + 2x", coeffs: &[ 1., 2., 0. ], expected: vec![ c(0., 0.), c(-2., 0.) ], degenerate: false },
        Example { name: "x² + 11x + 28", coeffs: &[ 1., 11., 28. ], expected: vec![ c(-4., 0.), c(-7., 0.) ], degenerate: false },
        Example { name: "x² + 2x + 1", coeffs: &[ 1., 2., 1. ], expected: vec![ c(-1., 0.), c(-1., 0.) ], degenerate: true },
        Example { name: "x³ - 1", coeffs: &[ 1., 0., 0., -1. ], expected: vec![ c(1., 0.), c(-0.5, w), c(-0.5, -w) ], degenerate: false },
        Example { name: "x³ - 3x² + 3x - 1", coeffs: &[ 1., -3., 3., -1. ], expected: vec![ c(1., 0.); 3 ], degenerate: true },
    ]
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Pass,
    Fail { actual: Roots, degenerate: bool },
}

pub fn run(example: &Example, config: SolverConfig) -> anyhow::Result<Outcome> {
    let solver = Solver::new(config).with_notifier(Silent);
    let (actual, degenerate) = match *example.coeffs {
        [ a, b, c ] => {
            let s = solver.quadratic(a, b, c)?;
            (Roots::from(s), s.is_degenerate)
        },
        [ a, b, c, d ] => {
            let s = solver.cubic(a, b, c, d)?;
            (Roots::from(s), s.is_degenerate)
        },
        _ => anyhow::bail!("{}: expected 3 or 4 coefficients, got {}", example.name, example.coeffs.len()),
    };
    let expected = Roots(example.expected.clone());
    let matches = approx::relative_eq!(actual, expected, epsilon = 1e-12) && degenerate == example.degenerate;
    info!("{}: {}", example.name, if matches { "ok" } else { "FAILED" });
    Ok(if matches { Outcome::Pass } else { Outcome::Fail { actual, degenerate } })
}
