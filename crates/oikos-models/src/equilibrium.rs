//! Competitive equilibrium with many consumers and firms.
//!
//! Consumers have quasilinear utility `c + α·q − ½β·q²` over a numeraire
//! `c` and the good; firms have cost `γ + δ·q + ½η·q²`. The short-run model
//! takes the number of firms as given; the long-run model determines it by
//! free entry (zero profit).

use crate::error::ModelError;
use crate::validity::{on_grid, positive};
use crate::ClosedForm;

/// Short-run competitive equilibrium parameters.
///
/// `N` consumers with income `Y`, `M` firms, demand intercept `α`, demand
/// slope `β`, fixed cost `γ`, linear cost `δ`, quadratic cost `η`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShortRun {
    n_consumers: f64,
    m_firms: f64,
    income: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    eta: f64,
}

/// Solved short-run equilibrium quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShortRunSolution {
    /// Market quantity `Q`.
    pub quantity: f64,
    /// Market price.
    pub price: f64,
    /// Quantity demanded per consumer.
    pub qd: f64,
    /// Quantity supplied per firm.
    pub qs: f64,
    /// Numeraire consumption per consumer.
    pub consumption: f64,
    /// Revenue per firm.
    pub revenue: f64,
    /// Cost per firm.
    pub cost: f64,
    /// Profit per firm.
    pub profit: f64,
    /// Total profit across firms.
    pub total_profit: f64,
    /// Utility per consumer.
    pub utility: f64,
    /// Total utility across consumers.
    pub total_utility: f64,
}

impl ShortRun {
    /// Creates the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless the counts, income,
    /// demand slope, and quadratic cost are positive and the linear
    /// coefficients are non-negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n_consumers: f64,
        m_firms: f64,
        income: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
        delta: f64,
        eta: f64,
    ) -> Result<Self, ModelError> {
        if !(n_consumers > 0.0) || !(m_firms > 0.0) {
            return Err(ModelError::BadParameter("population counts must be positive"));
        }
        if !(income > 0.0) {
            return Err(ModelError::BadParameter("income must be positive"));
        }
        if !(alpha > 0.0) || !(beta > 0.0) {
            return Err(ModelError::BadParameter(
                "demand intercept and slope must be positive",
            ));
        }
        if !(gamma >= 0.0) || !(delta >= 0.0) || !(eta > 0.0) {
            return Err(ModelError::BadParameter(
                "cost coefficients must be non-negative with positive curvature",
            ));
        }
        Ok(Self {
            n_consumers,
            m_firms,
            income,
            alpha,
            beta,
            gamma,
            delta,
            eta,
        })
    }

    /// The number of consumers `N`.
    #[must_use]
    pub fn n_consumers(&self) -> f64 {
        self.n_consumers
    }

    /// The number of firms `M`.
    #[must_use]
    pub fn m_firms(&self) -> f64 {
        self.m_firms
    }
}

impl ClosedForm for ShortRun {
    type Solution = ShortRunSolution;

    fn solve(&self) -> Result<ShortRunSolution, ModelError> {
        let slope = self.beta / self.n_consumers + self.eta / self.m_firms;
        if slope == 0.0 || !slope.is_finite() {
            return Err(ModelError::Undefined("aggregate slope degenerates"));
        }
        let quantity = (self.alpha - self.delta) / slope;
        let price = (self.n_consumers * self.eta * self.alpha
            + self.m_firms * self.beta * self.delta)
            / (self.n_consumers * self.eta + self.m_firms * self.beta);
        let qd = quantity / self.n_consumers;
        let qs = quantity / self.m_firms;
        let consumption = self.income - price * qd;
        let revenue = price * qs;
        let cost = self.gamma + self.delta * qs + 0.5 * self.eta * qs * qs;
        let profit = revenue - cost;
        let utility = consumption + self.alpha * qd - 0.5 * self.beta * qd * qd;
        if !price.is_finite() || !quantity.is_finite() {
            return Err(ModelError::Undefined("equilibrium is non-finite"));
        }
        Ok(ShortRunSolution {
            quantity,
            price,
            qd,
            qs,
            consumption,
            revenue,
            cost,
            profit,
            total_profit: self.m_firms * profit,
            utility,
            total_utility: self.n_consumers * utility,
        })
    }

    fn is_valid_on(&self, sol: &ShortRunSolution, unit: f64) -> bool {
        positive(sol.price)
            && positive(sol.qd)
            && positive(sol.qs)
            && positive(sol.consumption)
            && on_grid(sol.price, unit)
            && on_grid(sol.qd, unit)
            && on_grid(sol.qs, unit)
            && self.m_firms < self.n_consumers
    }
}

/// Long-run competitive equilibrium parameters.
///
/// Free entry pins per-firm output at minimum average cost and drives
/// profit to zero; the number of firms is an output, not an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongRun {
    n_consumers: f64,
    income: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    eta: f64,
}

/// Solved long-run equilibrium quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongRunSolution {
    /// Number of firms implied by free entry.
    pub m_firms: f64,
    /// Market quantity `Q`.
    pub quantity: f64,
    /// Market price.
    pub price: f64,
    /// Quantity demanded per consumer.
    pub qd: f64,
    /// Quantity supplied per firm.
    pub qs: f64,
    /// Numeraire consumption per consumer.
    pub consumption: f64,
    /// Profit per firm (zero up to rounding in a valid draw).
    pub profit: f64,
    /// Utility per consumer.
    pub utility: f64,
    /// Total utility across consumers.
    pub total_utility: f64,
}

impl LongRun {
    /// Creates the parameter record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] on non-positive counts, income,
    /// demand coefficients, or cost curvature, or on a negative fixed cost.
    pub fn new(
        n_consumers: f64,
        income: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
        delta: f64,
        eta: f64,
    ) -> Result<Self, ModelError> {
        if !(n_consumers > 0.0) {
            return Err(ModelError::BadParameter("population count must be positive"));
        }
        if !(income > 0.0) {
            return Err(ModelError::BadParameter("income must be positive"));
        }
        if !(alpha > 0.0) || !(beta > 0.0) {
            return Err(ModelError::BadParameter(
                "demand intercept and slope must be positive",
            ));
        }
        if !(gamma >= 0.0) || !(delta >= 0.0) || !(eta > 0.0) {
            return Err(ModelError::BadParameter(
                "cost coefficients must be non-negative with positive curvature",
            ));
        }
        Ok(Self {
            n_consumers,
            income,
            alpha,
            beta,
            gamma,
            delta,
            eta,
        })
    }

    /// The number of consumers `N`.
    #[must_use]
    pub fn n_consumers(&self) -> f64 {
        self.n_consumers
    }
}

impl ClosedForm for LongRun {
    type Solution = LongRunSolution;

    fn solve(&self) -> Result<LongRunSolution, ModelError> {
        // Minimum efficient scale: qs = sqrt(2γ/η)
        let qs = (2.0 * self.gamma / self.eta).sqrt();
        if !(qs > 0.0) || !qs.is_finite() {
            return Err(ModelError::Undefined(
                "free entry requires a positive fixed cost",
            ));
        }
        let price = self.delta + self.eta * qs;
        let qd = (self.alpha - price) / self.beta;
        let quantity = self.n_consumers * qd;
        let m_firms = quantity / qs;
        let consumption = self.income - price * qd;
        let revenue = price * qs;
        let cost = self.gamma + self.delta * qs + 0.5 * self.eta * qs * qs;
        let profit = revenue - cost;
        let utility = consumption + self.alpha * qd - 0.5 * self.beta * qd * qd;
        Ok(LongRunSolution {
            m_firms,
            quantity,
            price,
            qd,
            qs,
            consumption,
            profit,
            utility,
            total_utility: self.n_consumers * utility,
        })
    }

    fn is_valid_on(&self, sol: &LongRunSolution, unit: f64) -> bool {
        positive(sol.price)
            && positive(sol.qd)
            && positive(sol.qs)
            && positive(sol.consumption)
            && positive(sol.m_firms)
            && on_grid(sol.price, unit)
            && on_grid(sol.qd, unit)
            && on_grid(sol.qs, unit)
            && on_grid(sol.m_firms, 1.0)
            && sol.m_firms < self.n_consumers
    }
}
