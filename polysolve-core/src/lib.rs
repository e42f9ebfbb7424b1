#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod config;
pub mod error;
pub mod fmt;
pub mod math;
pub mod notify;
pub mod solution;
pub mod solver;

// Re-export math utilities at the crate root
pub use math::branch;
pub use math::cubic;
pub use math::quadratic;
pub use math::roots;

// Re-export key types for external use
pub use config::{Shift, SolverConfig, Tolerance};
pub use error::SolveError;
pub use notify::{LogNotifier, Notifier, Silent, DEGENERATE_MESSAGE};
pub use num_complex::Complex64;
pub use solution::{CubicSolution, QuadraticSolution, Solution};
pub use solver::Solver;

/// Roots of `a·x² + b·x + c`, using the default [`Tolerance`] and reporting degeneracy through [`LogNotifier`].
pub fn quadratic(a: f64, b: f64, c: f64) -> QuadraticSolution {
    quadratic::solve(a, b, c, &Tolerance::default(), &LogNotifier)
}

/// Roots of `a·x³ + b·x² + c·x + d`, using the default [`Shift`] and reporting degeneracy through [`LogNotifier`].
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> CubicSolution {
    cubic::solve(a, b, c, d, Shift::default(), &LogNotifier)
}

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, SolveError> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(SolveError::LogLevel(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None).unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("")).unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("trace")).unwrap(), log::LevelFilter::Trace);
        assert!(matches!(parse_log_level(Some("loud")), Err(SolveError::LogLevel(l)) if l == "loud"));
    }

    #[test]
    fn convenience_functions() {
        let s = quadratic(1., 11., 28.);
        assert_eq!(s.roots, [ Complex64::new(-4., 0.), Complex64::new(-7., 0.) ]);
        assert!(!s.is_degenerate);

        let s = cubic(1., -3., 3., -1.);
        assert!(s.is_degenerate);
    }
}
