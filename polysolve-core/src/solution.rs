use num_complex::Complex64;
use serde::Serialize;

/// Roots of a degree-`N` polynomial, in the order the closed-form formula produces them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Solution<const N: usize> {
    #[serde(with = "serde_roots")]
    pub roots: [Complex64; N],
    pub is_degenerate: bool,
}

pub type QuadraticSolution = Solution<2>;
pub type CubicSolution = Solution<3>;

impl<const N: usize> Solution<N> {
    /// Roots whose imaginary part is exactly zero.
    pub fn reals(&self) -> Vec<f64> {
        self.roots.iter().filter(|r| r.im == 0.).map(|r| r.re).collect()
    }
}

impl<const N: usize> From<Solution<N>> for crate::roots::Roots {
    fn from(s: Solution<N>) -> Self {
        crate::roots::Roots(s.roots.to_vec())
    }
}

mod serde_roots {
    use num_complex::Complex64;
    use serde::{ser::SerializeSeq, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(roots: &[Complex64; N], s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(N))?;
        for root in roots {
            seq.serialize_element(root)?;
        }
        seq.end()
    }
}
