use log::debug;
use num_complex::Complex64;

use crate::{config::Shift, notify::{Notifier, DEGENERATE_MESSAGE}, solution::CubicSolution};

use super::branch::{principal_cbrt, principal_sqrt, CBRT_UNITY_IM};

/// Roots of `a·x³ + b·x² + c·x + d`, via Cardano's reduction:
///
/// ```text
/// q = (3ac - b²) / 9a²
/// r = (9abc - 27a²d - 2b³) / 54a³
/// s = ∛(r + √(q³ + r²))
/// t = ∛(r - √(q³ + r²))
/// x₁ = s + t - h
/// x₂ = -(s + t)/2 - h + ω(s - t)
/// x₃ = -(s + t)/2 - h - ω(s - t)
/// ```
///
/// where `ω = (√3/2)·i` and `h` is the [`Shift`] term. Square and cube roots are principal-branch complex roots;
/// `s` and `t` are each taken independently, so when `q³ + r² > 0` and `r - √(q³ + r²) < 0` their product is not
/// `-q` and the results are not roots of the polynomial.
///
/// The solution is degenerate (and `notifier` is called once) when `x₁` is exactly equal to `x₂` or `x₃`.
pub fn solve(a: f64, b: f64, c: f64, d: f64, shift: Shift, notifier: &dyn Notifier) -> CubicSolution {
    let q = (3. * a * c - b.powi(2)) / (9. * a.powi(2));
    let r = (9. * a * b * c - 27. * a.powi(2) * d - 2. * b.powi(3)) / (54. * a.powi(3));
    let sq = principal_sqrt(q.powi(3) + r.powi(2));
    // `r - sq` (not `-sq + r`): the sign of a zero imaginary part picks the side of the branch cut
    let rc = Complex64::from(r);
    let s = principal_cbrt(rc + sq);
    let t = principal_cbrt(rc - sq);
    debug!("cubic({}, {}, {}, {}): q {}, r {}, s {}, t {}", a, b, c, d, q, r, s, t);

    let h = shift.term(a, b);
    let sum = s + t;
    let rot = *CBRT_UNITY_IM * (s - t);
    let x1 = sum - h;
    let x2 = -sum / 2. - h + rot;
    let x3 = -sum / 2. - h - rot;

    let is_degenerate = x1 == x2 || x1 == x3;
    if is_degenerate {
        notifier.notify(DEGENERATE_MESSAGE);
    }
    CubicSolution { roots: [ x1, x2, x3 ], is_degenerate }
}
