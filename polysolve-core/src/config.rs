use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the cubic formula shifts the depressed-cubic roots back onto the original polynomial.
///
/// The classical substitution is `x = y - b/(3a)` ([`Shift::Standard`]). [`Shift::Literal`] instead subtracts
/// `(b/3)·a`: `b` divided by 3, then multiplied by `a`. The two agree when `a = 1` (or `b = 0`); otherwise `Literal`
/// returns values that are generally not roots. It exists to reproduce results computed with that grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[default]
    Standard,
    Literal,
}

impl Shift {
    pub fn term(&self, a: f64, b: f64) -> f64 {
        match self {
            Shift::Standard => b / (3. * a),
            Shift::Literal => b / 3. * a,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Standard => write!(f, "standard"),
            Shift::Literal => write!(f, "literal"),
        }
    }
}

impl FromStr for Shift {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Shift::Standard),
            "literal" => Ok(Shift::Literal),
            _ => Err(format!("invalid shift: {} (expected \"standard\" or \"literal\")", s)),
        }
    }
}

/// Closeness test used to decide whether a quadratic discriminant is zero.
///
/// `x` is "zero" when `|x| <= epsilon`, or `|x| <= max_relative·|x|` (the latter only holds for `x = 0`, and is kept
/// so the comparison matches `approx::relative_eq!` exactly).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub epsilon: f64,
    pub max_relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { epsilon: f64::EPSILON, max_relative: f64::EPSILON }
    }
}

impl Tolerance {
    pub fn is_zero(&self, x: f64) -> bool {
        relative_eq!(x, 0., epsilon = self.epsilon, max_relative = self.max_relative)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub shift: Shift,
    pub tolerance: Tolerance,
}

impl SolverConfig {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn shift_terms() {
        assert_eq!(Shift::Standard.term(2., -6.), -1.);
        assert_eq!(Shift::Literal.term(2., -6.), -4.);
        // Unit leading coefficient: both groupings agree
        assert_eq!(Shift::Standard.term(1., -3.), Shift::Literal.term(1., -3.));
    }

    #[test]
    fn shift_parse() {
        assert_eq!("standard".parse::<Shift>().unwrap(), Shift::Standard);
        assert_eq!("literal".parse::<Shift>().unwrap(), Shift::Literal);
        assert!("cardano".parse::<Shift>().is_err());
        assert_eq!(Shift::Literal.to_string(), "literal");
    }

    #[test]
    fn tolerance() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(0.));
        assert!(tol.is_zero(-0.));
        assert!(tol.is_zero(1e-17));
        assert!(!tol.is_zero(1e-10));
        let loose = Tolerance { epsilon: 1e-6, ..Tolerance::default() };
        assert!(loose.is_zero(1e-10));
    }

    #[test]
    fn json() {
        assert_eq!(SolverConfig::from_json("{}").unwrap(), SolverConfig::default());
        let config = SolverConfig::from_json(r#"{ "shift": "literal", "tolerance": { "epsilon": 1e-9 } }"#).unwrap();
        assert_eq!(config.shift, Shift::Literal);
        assert_eq!(config.tolerance.epsilon, 1e-9);
        assert_eq!(config.tolerance.max_relative, f64::EPSILON);
        assert!(SolverConfig::from_json(r#"{ "shift": "sideways" }"#).is_err());
    }
}
