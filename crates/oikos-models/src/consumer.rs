//! Consumer optimization.

use oikos_print::{Polynomial, Term};

use crate::error::ModelError;
use crate::validity::{on_grid, positive};
use crate::ClosedForm;

/// Cobb-Douglas consumer `U = x^α · y^{1−α}` with budget
/// `p_x·x + p_y·y = I`.
///
/// The optimum spends the share `α` of income on `x` and the rest on `y`:
/// `x = α·I/p_x`, `y = (1−α)·I/p_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CobbDouglasConsumer {
    alpha: f64,
    income: f64,
    px: f64,
    py: f64,
}

/// The solved consumer optimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsumerOptimum {
    /// Optimal quantity of the first good.
    pub x: f64,
    /// Optimal quantity of the second good.
    pub y: f64,
    /// Utility at the optimum.
    pub utility: f64,
}

impl CobbDouglasConsumer {
    /// Creates the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `0 < α < 1` and income
    /// and both prices are positive.
    pub fn new(alpha: f64, income: f64, px: f64, py: f64) -> Result<Self, ModelError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ModelError::BadParameter(
                "expenditure share must lie strictly between 0 and 1",
            ));
        }
        if !(income > 0.0) {
            return Err(ModelError::BadParameter("income must be positive"));
        }
        if !(px > 0.0) || !(py > 0.0) {
            return Err(ModelError::BadParameter("prices must be positive"));
        }
        Ok(Self {
            alpha,
            income,
            px,
            py,
        })
    }

    /// The utility function as a two-term product rendering,
    /// `x^{α}` and `y^{1−α}`.
    #[must_use]
    pub fn utility_terms(&self) -> (Term, Term) {
        (
            Term::new(1.0, "x", self.alpha),
            Term::new(1.0, "y", 1.0 - self.alpha),
        )
    }

    /// The budget line as a polynomial in the two good symbols.
    #[must_use]
    pub fn budget_line(&self) -> Polynomial {
        Polynomial::new(vec![
            Term::new(self.px, "x", 1.0),
            Term::new(self.py, "y", 1.0),
        ])
    }

    /// Income `I`.
    #[must_use]
    pub fn income(&self) -> f64 {
        self.income
    }
}

impl ClosedForm for CobbDouglasConsumer {
    type Solution = ConsumerOptimum;

    fn solve(&self) -> Result<ConsumerOptimum, ModelError> {
        let x = self.alpha * self.income / self.px;
        let y = (1.0 - self.alpha) * self.income / self.py;
        let utility = x.powf(self.alpha) * y.powf(1.0 - self.alpha);
        if !x.is_finite() || !y.is_finite() {
            return Err(ModelError::Undefined("optimum is non-finite"));
        }
        Ok(ConsumerOptimum { x, y, utility })
    }

    fn is_valid_on(&self, sol: &ConsumerOptimum, unit: f64) -> bool {
        positive(sol.x) && positive(sol.y) && on_grid(sol.x, unit) && on_grid(sol.y, unit)
    }
}
