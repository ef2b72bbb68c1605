//! # oikos-print
//!
//! Equation rendering for the oikos problem generator.
//!
//! This crate provides:
//! - `Term`: a single algebraic term `c·x^p` rendered with the vanishing,
//!   unit-coefficient, and unit-exponent rules
//! - `Polynomial`: an ordered term sequence rendered as one signed expression
//! - `PrintOptions`: denominator bound and leading-sign policy
//!
//! Output is LaTeX-compatible plain text. The renderers guarantee that no
//! term boundary ever produces two consecutive sign characters, so the
//! concatenation re-parses as a single signed expression.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use polynomial::Polynomial;
pub use term::{PrintOptions, Term};
