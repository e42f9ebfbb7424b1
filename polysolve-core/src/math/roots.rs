use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use derive_more::Deref;
use itertools::Itertools;
use log::debug;
use num_complex::Complex64;
use ordered_float::OrderedFloat;

/// An unordered set of roots; comparisons first align the two sets by the permutation minimizing total distance.
#[derive(Clone, Debug, Deref, PartialEq)]
pub struct Roots(pub Vec<Complex64>);

impl Roots {
    pub fn align(&self, other: &Roots) -> Option<Self> {
        if self.len() != other.len() {
            None
        } else {
            let permutations = self.iter().permutations(self.len()).map(|perm| {
                let total_distance = perm.iter().zip(other.iter()).map(|(c0, c1)| (*c0 - c1).norm()).sum::<f64>();
                (total_distance, perm)
            });
            let min = permutations.min_by_key(|(total_distance, _)| OrderedFloat(*total_distance));
            min.map(|(distance, roots)| {
                debug!("aligned: {}", distance);
                debug!("  {:?}", roots);
                debug!("  {:?}", other);
                Roots(roots.into_iter().cloned().collect())
            })
        }
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(|r| r.to_string()).join(", "))
    }
}

fn all_eq(l: &Roots, r: &Roots, eq: impl Fn(&Complex64, &Complex64) -> bool) -> bool {
    l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
}

impl AbsDiffEq for Roots {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match self.align(other) {
            None => {
                debug!("abs_diff_eq: roots not aligned: {} vs {}", self.len(), other.len());
                false
            },
            Some(roots) => {
                let rv = all_eq(&roots, other, |l, r| l.re.abs_diff_eq(&r.re, epsilon) && l.im.abs_diff_eq(&r.im, epsilon));
                if !rv {
                    debug!("abs_diff_eq: roots not equal: {} vs {}", roots, other);
                }
                rv
            }
        }
    }
}

impl RelativeEq for Roots {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        match self.align(other) {
            None => {
                debug!("relative_eq: roots not aligned: {} vs {}", self.len(), other.len());
                false
            },
            Some(roots) => {
                let rv = all_eq(&roots, other, |l, r| {
                    l.re.relative_eq(&r.re, epsilon, max_relative) && l.im.relative_eq(&r.im, epsilon, max_relative)
                });
                if !rv {
                    debug!("relative_eq: roots not equal:");
                    debug!("  {}", roots);
                    debug!("  {}", other);
                }
                rv
            }
        }
    }
}

/// Evaluate the polynomial with `coeffs` (highest degree first) at `x`, by Horner's rule.
pub fn residual(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs.iter().fold(Complex64::new(0., 0.), |acc, c| acc * x + *c)
}
