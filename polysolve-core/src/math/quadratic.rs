use log::debug;
use num_complex::Complex64;

use crate::{config::Tolerance, notify::{Notifier, DEGENERATE_MESSAGE}, solution::QuadraticSolution};

use super::branch::principal_sqrt;

/// Roots of `a·x² + b·x + c`, as `(-b ± √det) / 2a` with `det = b² - 4ac`.
///
/// `√det` is the principal complex square root, so a negative discriminant yields a conjugate pair (the `+` root
/// first, with non-negative imaginary part when `a > 0`). When `det` is zero within `tolerance`, `notifier` is
/// called once and the solution is flagged degenerate; the roots are computed the same way regardless.
///
/// `a = 0` is not checked: the division yields infinities/NaNs (see [`Solver`](crate::Solver) for a checked
/// variant).
pub fn solve(a: f64, b: f64, c: f64, tolerance: &Tolerance, notifier: &dyn Notifier) -> QuadraticSolution {
    let det = b * b - 4. * a * c;
    debug!("quadratic({}, {}, {}): det {}", a, b, c, det);
    let is_degenerate = tolerance.is_zero(det);
    if is_degenerate {
        notifier.notify(DEGENERATE_MESSAGE);
    }
    let sq = principal_sqrt(det);
    let b = Complex64::from(-b);
    let a2 = 2. * a;
    QuadraticSolution {
        roots: [ (b + sq) / a2, (b - sq) / a2 ],
        is_degenerate,
    }
}
