use std::fmt;

use log::debug;

use crate::{
    config::SolverConfig,
    cubic,
    error::SolveError,
    notify::{LogNotifier, Notifier},
    quadratic,
    solution::{CubicSolution, QuadraticSolution},
};

/// Solves quadratics and cubics under a fixed [`SolverConfig`], reporting degeneracy to a [`Notifier`].
///
/// Unlike the bare [`quadratic::solve`] / [`cubic::solve`], coefficients are validated first: the leading coefficient
/// must be nonzero and every coefficient finite.
pub struct Solver {
    pub config: SolverConfig,
    notifier: Box<dyn Notifier>,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(SolverConfig::default())
    }
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver").field("config", &self.config).finish_non_exhaustive()
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver { config, notifier: Box::new(LogNotifier) }
    }

    pub fn with_notifier(self, notifier: impl Notifier + 'static) -> Self {
        Solver { notifier: Box::new(notifier), ..self }
    }

    pub fn quadratic(&self, a: f64, b: f64, c: f64) -> Result<QuadraticSolution, SolveError> {
        validate(&[ a, b, c ])?;
        Ok(quadratic::solve(a, b, c, &self.config.tolerance, self.notifier.as_ref()))
    }

    pub fn cubic(&self, a: f64, b: f64, c: f64, d: f64) -> Result<CubicSolution, SolveError> {
        validate(&[ a, b, c, d ])?;
        Ok(cubic::solve(a, b, c, d, self.config.shift, self.notifier.as_ref()))
    }
}

/// Check that `coeffs` (highest degree first) are finite, with a nonzero leading term.
pub fn validate(coeffs: &[f64]) -> Result<(), SolveError> {
    if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(SolveError::NonFinite { index, value });
    }
    match coeffs.first() {
        Some(a) if *a == 0. => {
            let degree = coeffs.len() - 1;
            debug!("validate: leading coefficient of degree-{} polynomial is zero", degree);
            Err(SolveError::LeadingZero { degree })
        },
        _ => Ok(()),
    }
}
