//! The documented example equations, run through the public API.

use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use polysolve_core::{
    branch::CBRT_UNITY_IM, cubic, quadratic, roots::{residual, Roots}, Complex64, Shift, Silent, Solver, SolverConfig,
    Tolerance, DEGENERATE_MESSAGE,
};
use test_log::test;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn counting() -> (Arc<Mutex<usize>>, impl Fn(&str) + Send + Sync + 'static) {
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    (count, move |m: &str| {
        assert_eq!(m, DEGENERATE_MESSAGE);
        *sink.lock().unwrap() += 1;
    })
}

#[test]
fn quadratic_examples() {
    let s = polysolve_core::quadratic(1., 2., 0.);
    assert_eq!(s.roots, [ c(0., 0.), c(-2., 0.) ]);
    let s = polysolve_core::quadratic(1., 11., 28.);
    assert_eq!(s.roots, [ c(-4., 0.), c(-7., 0.) ]);
}

#[test]
fn quadratic_double_root_notifies_once() {
    let (count, notifier) = counting();
    let s = quadratic::solve(1., 2., 1., &Tolerance::default(), &notifier);
    assert_eq!(*count.lock().unwrap(), 1);
    assert!(s.is_degenerate);
    assert_eq!(s.roots, [ c(-1., 0.), c(-1., 0.) ]);

    let (count, notifier) = counting();
    quadratic::solve(1., 3., 1., &Tolerance::default(), &notifier);
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn cubic_roots_of_unity() {
    let s = polysolve_core::cubic(1., 0., 0., -1.);
    let w = CBRT_UNITY_IM.im;
    let expected = Roots(vec![ c(1., 0.), c(-0.5, w), c(-0.5, -w) ]);
    assert_relative_eq!(Roots::from(s), expected, epsilon = 1e-12);
    // Same ordering under either shift, since b = 0
    let literal = cubic::solve(1., 0., 0., -1., Shift::Literal, &Silent);
    assert_eq!(literal, s);
}

#[test]
fn cubic_triple_root_notifies_once() {
    let (count, notifier) = counting();
    let s = cubic::solve(1., -3., 3., -1., Shift::default(), &notifier);
    assert_eq!(*count.lock().unwrap(), 1);
    assert!(s.is_degenerate);
    for x in s.roots {
        assert_relative_eq!(x.re, 1.);
        assert_relative_eq!(x.im, 0.);
    }
}

#[test]
fn roots_satisfy_polynomials() {
    let solver = Solver::default().with_notifier(Silent);
    for [ a, b, c ] in [ [ 1., 2., 0. ], [ 1., 11., 28. ], [ 1., 2., 1. ], [ 3., -1., 4. ], [ -2., 0.5, 7. ] ] {
        for x in solver.quadratic(a, b, c).unwrap().roots {
            assert!(residual(&[ a, b, c ], x).norm() < 1e-12, "{}x² + {}x + {} at {}", a, b, c, x);
        }
    }
    // Cubics whose principal-branch cube roots pair up: three real roots, or q³ + r² ≥ 0 with both radicands ≥ 0
    let cubics = [
        [ 1., 0., 0., -1. ],
        [ 1., 0., 0., 1. ],
        [ 1., -6., 11., -6. ],
        [ 2., -4., -22., 24. ],
        [ 1., -3., 3., -1. ],
        [ 5., 0., -5., 0. ],
    ];
    for coeffs in cubics {
        let [ a, b, c, d ] = coeffs;
        for x in solver.cubic(a, b, c, d).unwrap().roots {
            let r = residual(&coeffs, x);
            assert!(r.norm() < 1e-12, "{:?} at {}: residual {}", coeffs, x, r);
        }
    }
}

#[test]
fn idempotent() {
    let solver = Solver::new(SolverConfig::default()).with_notifier(Silent);
    assert_eq!(solver.quadratic(2., 3., 4.), solver.quadratic(2., 3., 4.));
    assert_eq!(solver.cubic(2., 3., 4., 5.), solver.cubic(2., 3., 4., 5.));
}
