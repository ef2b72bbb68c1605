//! Market equilibrium models.

use oikos_rational::TOLERANCE;

use crate::curves::{ExponentialDemand, ExponentialSupply, LinearDemand, LinearSupply};
use crate::error::ModelError;
use crate::validity::{on_grid, positive, within};
use crate::ClosedForm;

/// A market-clearing price and quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketEquilibrium {
    /// Equilibrium price.
    pub price: f64,
    /// Equilibrium quantity.
    pub quantity: f64,
}

/// A market with linear demand and supply.
///
/// Clears where `a_d − b_d·p = a_s + b_s·p`, giving
/// `p = (a_d − a_s)/(b_d + b_s)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMarket {
    demand: LinearDemand,
    supply: LinearSupply,
}

impl LinearMarket {
    /// Creates the market from its two curves.
    #[must_use]
    pub fn new(demand: LinearDemand, supply: LinearSupply) -> Self {
        Self { demand, supply }
    }

    /// Returns the demand curve.
    #[must_use]
    pub fn demand(&self) -> &LinearDemand {
        &self.demand
    }

    /// Returns the supply curve.
    #[must_use]
    pub fn supply(&self) -> &LinearSupply {
        &self.supply
    }
}

impl ClosedForm for LinearMarket {
    type Solution = MarketEquilibrium;

    fn solve(&self) -> Result<MarketEquilibrium, ModelError> {
        let slope_sum = self.demand.slope() + self.supply.slope();
        if slope_sum == 0.0 {
            return Err(ModelError::Undefined("demand and supply slopes cancel"));
        }
        let price = (self.demand.intercept() - self.supply.intercept()) / slope_sum;
        let quantity = self.demand.quantity_at(price);
        // Both curves must clear at the computed price
        if (quantity - self.supply.quantity_at(price)).abs()
            > TOLERANCE * quantity.abs().max(1.0)
        {
            return Err(ModelError::Undefined("market does not clear"));
        }
        Ok(MarketEquilibrium { price, quantity })
    }

    fn is_valid_on(&self, eq: &MarketEquilibrium, unit: f64) -> bool {
        positive(eq.price)
            && positive(eq.quantity)
            && on_grid(eq.price, unit)
            && on_grid(eq.quantity, unit)
    }
}

/// A market with constant-elasticity demand and supply.
///
/// Clears at `q = (a_d/a_s)^{1/(k_s − k_d)}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialMarket {
    demand: ExponentialDemand,
    supply: ExponentialSupply,
}

impl ExponentialMarket {
    /// Creates the market from its two curves.
    #[must_use]
    pub fn new(demand: ExponentialDemand, supply: ExponentialSupply) -> Self {
        Self { demand, supply }
    }

    /// Returns the demand curve.
    #[must_use]
    pub fn demand(&self) -> &ExponentialDemand {
        &self.demand
    }

    /// Returns the supply curve.
    #[must_use]
    pub fn supply(&self) -> &ExponentialSupply {
        &self.supply
    }
}

impl ClosedForm for ExponentialMarket {
    type Solution = MarketEquilibrium;

    fn solve(&self) -> Result<MarketEquilibrium, ModelError> {
        let gap = self.supply.exponent() - self.demand.exponent();
        if gap == 0.0 {
            return Err(ModelError::Undefined("demand and supply exponents coincide"));
        }
        let quantity = (self.demand.scale() / self.supply.scale()).powf(1.0 / gap);
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ModelError::Undefined("no positive clearing quantity"));
        }
        let price = self.demand.price_at(quantity);
        let supply_price = self.supply.price_at(quantity);
        if (price - supply_price).abs() > 1e-3 * price.abs() {
            return Err(ModelError::Undefined("market does not clear"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(ModelError::Undefined("no positive clearing price"));
        }
        Ok(MarketEquilibrium { price, quantity })
    }

    fn is_valid_on(&self, eq: &MarketEquilibrium, unit: f64) -> bool {
        positive(eq.price)
            && positive(eq.quantity)
            && on_grid(eq.price, unit)
            && on_grid(eq.quantity, unit)
    }
}

/// A linear market with a per-unit tax wedged between the buyer and seller
/// price.
///
/// Buyers face `p_b = p_s + t`; the market clears where
/// `a_d − b_d·(p_s + t) = a_s + b_s·p_s`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaxedLinearMarket {
    market: LinearMarket,
    tax: f64,
}

/// The solved after-tax outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaxIncidence {
    /// Price paid by buyers.
    pub buyer_price: f64,
    /// Price received by sellers.
    pub seller_price: f64,
    /// After-tax quantity traded.
    pub quantity: f64,
    /// Government revenue `t·q`.
    pub tax_revenue: f64,
    /// Deadweight loss relative to the untaxed equilibrium.
    pub deadweight_loss: f64,
}

impl TaxedLinearMarket {
    /// Creates the taxed market.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] on a negative tax.
    pub fn new(market: LinearMarket, tax: f64) -> Result<Self, ModelError> {
        if !(tax >= 0.0) {
            return Err(ModelError::BadParameter("tax must be non-negative"));
        }
        Ok(Self { market, tax })
    }

    /// Returns the underlying untaxed market.
    #[must_use]
    pub fn market(&self) -> &LinearMarket {
        &self.market
    }

    /// Returns the per-unit tax.
    #[must_use]
    pub fn tax(&self) -> f64 {
        self.tax
    }
}

impl ClosedForm for TaxedLinearMarket {
    type Solution = TaxIncidence;

    fn solve(&self) -> Result<TaxIncidence, ModelError> {
        let demand = self.market.demand();
        let supply = self.market.supply();
        let slope_sum = demand.slope() + supply.slope();
        if slope_sum == 0.0 {
            return Err(ModelError::Undefined("demand and supply slopes cancel"));
        }
        let seller_price = (demand.intercept()
            - supply.intercept()
            - demand.slope() * self.tax)
            / slope_sum;
        let buyer_price = seller_price + self.tax;
        let quantity = demand.quantity_at(buyer_price);
        let untaxed = self.market.solve()?;
        Ok(TaxIncidence {
            buyer_price,
            seller_price,
            quantity,
            tax_revenue: self.tax * quantity,
            deadweight_loss: 0.5 * self.tax * (untaxed.quantity - quantity),
        })
    }

    fn is_valid_on(&self, sol: &TaxIncidence, unit: f64) -> bool {
        // The untaxed equilibrium is part of the question; it must be nice
        // too (delegation to the nested market's own gate)
        let nested_ok = self
            .market
            .solve()
            .map(|eq| {
                self.market.is_valid_on(&eq, unit)
                    && within(sol.quantity, 0.0, eq.quantity)
            })
            .unwrap_or(false);
        nested_ok
            && positive(sol.seller_price)
            && on_grid(sol.buyer_price, unit)
            && on_grid(sol.seller_price, unit)
            && on_grid(sol.quantity, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ad: f64, bd: f64, as_: f64, bs: f64) -> LinearMarket {
        LinearMarket::new(
            LinearDemand::new(ad, bd).unwrap(),
            LinearSupply::new(as_, bs).unwrap(),
        )
    }

    #[test]
    fn clean_linear_equilibrium_accepted() {
        // q_d = 120 - p, q_s = 2p  =>  p = 40, q = 80
        let market = linear(120.0, 1.0, 0.0, 2.0);
        let eq = market.solve().unwrap();
        assert!((eq.price - 40.0).abs() < 1e-12);
        assert!((eq.quantity - 80.0).abs() < 1e-12);
        assert!(market.is_valid(&eq));
    }

    #[test]
    fn fractional_price_rejected() {
        // q_d = 121 - p, q_s = 2p  =>  p = 40.33...
        let market = linear(121.0, 1.0, 0.0, 2.0);
        let eq = market.solve().unwrap();
        assert!((eq.price - 121.0 / 3.0).abs() < 1e-9);
        assert!(!market.is_valid(&eq));
    }

    #[test]
    fn gate_is_idempotent() {
        let market = linear(120.0, 1.0, 0.0, 2.0);
        let eq = market.solve().unwrap();
        let first = market.is_valid(&eq);
        assert_eq!(first, market.is_valid(&eq));
    }

    #[test]
    fn coarser_grid_accepts_halves() {
        // q_d = 11 - p, q_s = p  =>  p = 5.5, q = 5.5
        let market = linear(11.0, 1.0, 0.0, 1.0);
        let eq = market.solve().unwrap();
        assert!(!market.is_valid(&eq));
        assert!(market.is_valid_on(&eq, 0.5));
    }

    #[test]
    fn tax_wedge_splits_incidence() {
        // Untaxed: p = 40, q = 80. With t = 6: p_s = 38, p_b = 44, q = 76
        let taxed = TaxedLinearMarket::new(linear(120.0, 1.0, 0.0, 2.0), 6.0).unwrap();
        let sol = taxed.solve().unwrap();
        assert!((sol.seller_price - 38.0).abs() < 1e-12);
        assert!((sol.buyer_price - 44.0).abs() < 1e-12);
        assert!((sol.quantity - 76.0).abs() < 1e-12);
        assert!((sol.tax_revenue - 456.0).abs() < 1e-12);
        assert!((sol.deadweight_loss - 12.0).abs() < 1e-12);
        assert!(taxed.is_valid(&sol));
    }

    #[test]
    fn tax_gate_delegates_to_untaxed_market() {
        // The after-tax numbers are whole, but the untaxed equilibrium
        // (p = 121/3) is not; the nested gate must reject the draw
        let taxed = TaxedLinearMarket::new(linear(121.0, 1.0, 0.0, 2.0), 6.0).unwrap();
        let sol = taxed.solve().unwrap();
        assert!(!taxed.is_valid(&sol));
    }

    #[test]
    fn negative_tax_rejected_at_construction() {
        assert_eq!(
            TaxedLinearMarket::new(linear(120.0, 1.0, 0.0, 2.0), -1.0),
            Err(ModelError::BadParameter("tax must be non-negative"))
        );
    }

    #[test]
    fn exponential_market_solves() {
        // demand p = 6 q^{-1/2}, supply p = 1 * q^{2}  (defaults in the
        // generator): q = 6^{1/2.5}; not nice, but well-defined
        let market = ExponentialMarket::new(
            ExponentialDemand::new(6.0, -0.5).unwrap(),
            ExponentialSupply::new(1.0, 2.0).unwrap(),
        );
        let eq = market.solve().unwrap();
        assert!(eq.price > 0.0 && eq.quantity > 0.0);
        // p = a_d q^{k_d} must match a_s q^{k_s}
        assert!((eq.price - eq.quantity * eq.quantity).abs() < 1e-9);
    }

    #[test]
    fn exponential_market_nice_case() {
        // demand p = 4 q^{-1}, supply p = 1 * q  =>  q = 2, p = 2
        let market = ExponentialMarket::new(
            ExponentialDemand::new(4.0, -1.0).unwrap(),
            ExponentialSupply::new(1.0, 1.0).unwrap(),
        );
        let eq = market.solve().unwrap();
        assert!((eq.quantity - 2.0).abs() < 1e-9);
        assert!((eq.price - 2.0).abs() < 1e-9);
        assert!(market.is_valid(&eq));
    }
}
