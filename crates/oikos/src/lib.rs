//! # Oikos
//!
//! A pure computation library for randomized microeconomics practice
//! problems with exact, pedagogically clean closed-form answers.
//!
//! Every problem generator follows the same four-part pattern:
//!
//! - **Rational canonicalization**: coefficients and answers reduce to
//!   bounded-denominator fractions, or degrade to decimal display
//! - **Equation printing**: terms and signed polynomial sums render as
//!   clean LaTeX-compatible notation
//! - **Closed-form solve + validity gate**: pure per-model solvers with
//!   niceness predicates driven by the caller's rejection-sampling loop
//! - **Distractor synthesis**: deduplicated, consistently formatted wrong
//!   answers for multiple-choice rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use oikos::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let market = LinearMarket::new(
//!     LinearDemand::new(120.0, 1.0)?,
//!     LinearSupply::new(0.0, 2.0)?,
//! );
//! let eq = market.solve()?;
//! assert!(market.is_valid(&eq));
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let choices = generate_numeric(
//!     eq.price,
//!     3,
//!     &NumericPolicy::additive(5.0),
//!     &ChoiceFormat::default(),
//!     true,
//!     &mut rng,
//! );
//! assert_eq!(choices.correct().text, "40");
//! # Ok::<(), oikos::models::ModelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use oikos_distract as distract;
pub use oikos_models as models;
pub use oikos_print as print;
pub use oikos_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use oikos_distract::{
        generate_numeric, generate_symbolic, Choice, ChoiceFormat, ChoiceSet, NumericPolicy,
        TermChoiceSet,
    };
    pub use oikos_models::{
        ClosedForm, CobbDouglasConsumer, CournotDuopoly, ExponentialDemand, ExponentialMarket,
        ExponentialSupply, LinearDemand, LinearMarket, LinearSupply, LongRun, ModelError,
        Monopoly, ShortRun, TaxedLinearMarket,
    };
    pub use oikos_print::{Polynomial, PrintOptions, Term};
    pub use oikos_rational::{is_divisible, is_integer_value, FracStyle, Fraction};
}
