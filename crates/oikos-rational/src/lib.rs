//! # oikos-rational
//!
//! Bounded-denominator rational canonicalization for the oikos problem
//! generator.
//!
//! This crate provides:
//! - `Fraction`: a real value reduced to `n/d` with `d <= max_denom`,
//!   falling back to fixed-point decimal display when no such fraction
//!   exists at the required precision
//! - Divisibility and integrality checks used by validity gates
//! - Signed rendering with caller-controlled sign stripping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fraction;

#[cfg(test)]
mod proptests;

pub use fraction::{
    is_divisible, is_integer_value, strip_leading_sign, FracStyle, Fraction, TOLERANCE,
};
