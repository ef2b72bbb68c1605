//! Imperfect competition: monopoly and Cournot duopoly.

use oikos_print::Polynomial;

use crate::error::ModelError;
use crate::validity::{on_grid, positive};
use crate::ClosedForm;

/// Monopoly facing inverse demand `p = a − b·q` with constant marginal
/// cost `c`.
///
/// Marginal revenue `a − 2b·q` equals marginal cost at `q = (a − c)/(2b)`,
/// giving `p = (a + c)/2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monopoly {
    a: f64,
    b: f64,
    c: f64,
}

/// The solved monopoly outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonopolySolution {
    /// Profit-maximizing quantity.
    pub quantity: f64,
    /// Price charged.
    pub price: f64,
    /// Profit gross of any fixed cost.
    pub profit: f64,
}

impl Monopoly {
    /// Creates the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a > 0`, `b > 0`, and
    /// `c >= 0`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ModelError> {
        if !(a > 0.0) || !(b > 0.0) {
            return Err(ModelError::BadParameter(
                "inverse demand coefficients must be positive",
            ));
        }
        if !(c >= 0.0) {
            return Err(ModelError::BadParameter(
                "marginal cost must be non-negative",
            ));
        }
        Ok(Self { a, b, c })
    }

    /// Inverse demand as a polynomial in the quantity symbol.
    #[must_use]
    pub fn inverse_demand(&self, quantity_symbol: &str) -> Polynomial {
        Polynomial::from_slices(&[self.a, -self.b], quantity_symbol, &[0.0, 1.0])
    }

    /// Marginal revenue as a polynomial in the quantity symbol.
    #[must_use]
    pub fn marginal_revenue(&self, quantity_symbol: &str) -> Polynomial {
        Polynomial::from_slices(&[self.a, -2.0 * self.b], quantity_symbol, &[0.0, 1.0])
    }
}

impl ClosedForm for Monopoly {
    type Solution = MonopolySolution;

    fn solve(&self) -> Result<MonopolySolution, ModelError> {
        if self.a <= self.c {
            return Err(ModelError::Undefined(
                "marginal cost at or above the choke price",
            ));
        }
        let quantity = (self.a - self.c) / (2.0 * self.b);
        let price = (self.a + self.c) / 2.0;
        let profit = (price - self.c) * quantity;
        Ok(MonopolySolution {
            quantity,
            price,
            profit,
        })
    }

    fn is_valid_on(&self, sol: &MonopolySolution, unit: f64) -> bool {
        positive(sol.quantity)
            && positive(sol.profit)
            && on_grid(sol.price, unit)
            && on_grid(sol.quantity, unit)
    }
}

/// Cournot duopoly with inverse demand `p = a − b·(q₁ + q₂)` and constant
/// marginal costs `c₁`, `c₂`.
///
/// Best responses intersect at `qᵢ = (a − 2cᵢ + cⱼ)/(3b)`,
/// `p = (a + c₁ + c₂)/3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CournotDuopoly {
    a: f64,
    b: f64,
    c1: f64,
    c2: f64,
}

/// The solved Cournot equilibrium.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CournotSolution {
    /// Firm 1 quantity.
    pub q1: f64,
    /// Firm 2 quantity.
    pub q2: f64,
    /// Market price.
    pub price: f64,
    /// Firm 1 profit.
    pub profit1: f64,
    /// Firm 2 profit.
    pub profit2: f64,
}

impl CournotDuopoly {
    /// Creates the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a > 0`, `b > 0`, and
    /// both marginal costs are non-negative.
    pub fn new(a: f64, b: f64, c1: f64, c2: f64) -> Result<Self, ModelError> {
        if !(a > 0.0) || !(b > 0.0) {
            return Err(ModelError::BadParameter(
                "inverse demand coefficients must be positive",
            ));
        }
        if !(c1 >= 0.0) || !(c2 >= 0.0) {
            return Err(ModelError::BadParameter(
                "marginal costs must be non-negative",
            ));
        }
        Ok(Self { a, b, c1, c2 })
    }

    /// Inverse demand as a polynomial in a combined-quantity symbol
    /// (e.g. `"q_1+q_2"` pre-rendered by the caller, or just `"Q"`).
    #[must_use]
    pub fn inverse_demand(&self, quantity_symbol: &str) -> Polynomial {
        Polynomial::from_slices(&[self.a, -self.b], quantity_symbol, &[0.0, 1.0])
    }
}

impl ClosedForm for CournotDuopoly {
    type Solution = CournotSolution;

    fn solve(&self) -> Result<CournotSolution, ModelError> {
        let q1 = (self.a - 2.0 * self.c1 + self.c2) / (3.0 * self.b);
        let q2 = (self.a - 2.0 * self.c2 + self.c1) / (3.0 * self.b);
        let price = (self.a + self.c1 + self.c2) / 3.0;
        if !q1.is_finite() || !q2.is_finite() {
            return Err(ModelError::Undefined("equilibrium is non-finite"));
        }
        Ok(CournotSolution {
            q1,
            q2,
            price,
            profit1: (price - self.c1) * q1,
            profit2: (price - self.c2) * q2,
        })
    }

    fn is_valid_on(&self, sol: &CournotSolution, unit: f64) -> bool {
        positive(sol.q1)
            && positive(sol.q2)
            && sol.price > self.c1.max(self.c2)
            && on_grid(sol.q1, unit)
            && on_grid(sol.q2, unit)
            && on_grid(sol.price, unit)
    }
}
