//! # oikos-distract
//!
//! Wrong-answer synthesis for multiple-choice rendering.
//!
//! Given a correct answer, the synthesizer produces a small set of
//! plausible but wrong alternatives:
//! - numerically, by additive or multiplicative perturbation
//! - symbolically, by structural mutation of a term (sign flip, exponent
//!   swap)
//!
//! Guarantees: the correct answer appears exactly once; all entries are
//! pairwise distinct *after formatting* (two distinct floats can round to
//! the same display string); the perturbation search is a fixed escalating
//! schedule, never an unbounded retry — on exhaustion fewer distractors are
//! returned. All randomness comes from a caller-supplied generator, so a
//! fixed seed reproduces the choice set byte for byte.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod choice;
pub mod numeric;
pub mod symbolic;

#[cfg(test)]
mod proptests;

pub use choice::{Choice, ChoiceFormat, ChoiceSet, TermChoiceSet};
pub use numeric::{generate_numeric, NumericPolicy};
pub use symbolic::generate_symbolic;
