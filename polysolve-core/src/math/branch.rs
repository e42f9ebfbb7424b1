//! Principal-branch complex roots, and the constant shared by the cubic formula.
//!
//! Both roots are taken on the principal branch (cut along the negative real axis), so they agree with the real
//! functions on the positive reals but not on the negative ones: `principal_cbrt(-1)` is `0.5 + 0.866i`, not `-1`.

use std::sync::LazyLock;

use num_complex::Complex64;

/// Imaginary part of the primitive cube root of unity, `(√3/2)·i`.
pub static CBRT_UNITY_IM: LazyLock<Complex64> = LazyLock::new(|| Complex64::new(0., 3f64.sqrt() / 2.));

static ONE_THIRD: f64 = 1. / 3.;

/// Principal square root of a real number, promoted to the complex plane.
///
/// Negative inputs yield a purely imaginary result with non-negative imaginary part (and an exactly-zero real part).
pub fn principal_sqrt(x: f64) -> Complex64 {
    Complex64::new(x, 0.).sqrt()
}

/// Principal cube root `z^(1/3) = |z|^(1/3)·e^(i·arg(z)/3)`, with `arg(z) ∈ (-π, π]`.
pub fn principal_cbrt(z: Complex64) -> Complex64 {
    if z.re == 0. && z.im == 0. {
        Complex64::new(0., 0.)
    } else {
        z.powf(ONE_THIRD)
    }
}
