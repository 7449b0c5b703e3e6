use thiserror::Error;

/// Failure surface for [`crate::solve`].
///
/// Non-convergence is deliberately absent from this enum: it is reported through
/// [`crate::SolveOutcome::converged`] rather than as an error, since an exhausted restart
/// budget is a normal, expected outcome the caller may choose to tolerate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("overflow computing mole fraction for complex {j} at the current lambda (logx > MAXLOGX)")]
    Overflow { j: usize },

    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
