#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("Leading coefficient is zero; equation is not of degree {degree}")]
    LeadingZero { degree: usize },

    #[error("Coefficient {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("Invalid log level: {0}")]
    LogLevel(String),
}
