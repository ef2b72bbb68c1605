//! # oikos-models
//!
//! Closed-form economic models for the oikos problem generator.
//!
//! Every model follows the same contract:
//! - a parameter record with a validating constructor (bad parameters are
//!   rejected at construction, not at call sites)
//! - a pure `solve` returning a typed solution record, with structural
//!   degeneracies reported as [`ModelError::Undefined`]
//! - a side-effect-free validity gate that accepts or rejects a solution on
//!   pedagogical niceness grounds (integrality, sign, bounds, cross-field)
//!
//! Rejection by a gate is not an error: the caller's rejection-sampling loop
//! redraws parameters until a draw passes. That loop lives outside this
//! crate, as does all randomness.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod consumer;
pub mod curves;
pub mod equilibrium;
pub mod error;
pub mod firms;
pub mod market;
pub mod validity;

pub use consumer::{CobbDouglasConsumer, ConsumerOptimum};
pub use curves::{ExponentialDemand, ExponentialSupply, LinearDemand, LinearSupply};
pub use equilibrium::{LongRun, LongRunSolution, ShortRun, ShortRunSolution};
pub use error::ModelError;
pub use firms::{CournotDuopoly, CournotSolution, Monopoly, MonopolySolution};
pub use market::{
    ExponentialMarket, LinearMarket, MarketEquilibrium, TaxIncidence, TaxedLinearMarket,
};

/// The per-model contract: a pure closed-form solve plus a niceness gate.
///
/// `solve` is deterministic and total over the admissible parameter domain;
/// a parameter combination that makes a solve step undefined yields
/// [`ModelError::Undefined`]. The gate never mutates its inputs and is
/// idempotent: calling it repeatedly on the same solution yields the same
/// boolean.
pub trait ClosedForm {
    /// The typed solution record this model produces.
    type Solution;

    /// Computes the closed-form solution from the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Undefined`] when the parameters make a solve
    /// step undefined (a structurally zero denominator, a non-finite
    /// intermediate). This is a precondition violation, not a recoverable
    /// runtime error.
    fn solve(&self) -> Result<Self::Solution, ModelError>;

    /// Accepts or rejects a solution with answers aligned to `unit`
    /// (e.g. `1.0` for whole numbers, `0.5` for half-unit grids).
    fn is_valid_on(&self, solution: &Self::Solution, unit: f64) -> bool;

    /// Accepts or rejects a solution on the whole-number grid.
    fn is_valid(&self, solution: &Self::Solution) -> bool {
        self.is_valid_on(solution, 1.0)
    }
}
