//! Model error taxonomy.

use thiserror::Error;

/// Errors produced by model constructors and solvers.
///
/// Gate rejection is deliberately not represented here: a solution that is
/// merely not "nice" is an expected outcome of rejection sampling, not an
/// error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A solve step is undefined for these parameters (degenerate
    /// denominator, non-finite intermediate). Propagates to the caller
    /// unmodified; there is no sensible fallback for an undefined model.
    #[error("solution is undefined: {0}")]
    Undefined(&'static str),

    /// A parameter record violated its declared constraints at construction.
    #[error("invalid parameter: {0}")]
    BadParameter(&'static str),
}
