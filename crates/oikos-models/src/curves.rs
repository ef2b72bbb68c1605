//! Demand and supply curves.
//!
//! Curves are the display and evaluation primitives the market models are
//! built from. Each validating constructor enforces the curve's sign
//! constraints once, so downstream algebra can rely on them.

use oikos_print::{Polynomial, Term};

use crate::error::ModelError;

/// Linear demand `q_d = a − b·p`.
///
/// Parameterized in price space (quantity as a function of price), which is
/// also the form shown to students. The inverse form `p = a/b − (1/b)·q` is
/// available for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDemand {
    a: f64,
    b: f64,
}

impl LinearDemand {
    /// Creates a demand curve with intercept `a` and slope `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a > 0` and `b > 0`.
    pub fn new(a: f64, b: f64) -> Result<Self, ModelError> {
        if !(a > 0.0) {
            return Err(ModelError::BadParameter("demand intercept must be positive"));
        }
        if !(b > 0.0) {
            return Err(ModelError::BadParameter("demand slope must be positive"));
        }
        Ok(Self { a, b })
    }

    /// Returns the intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.a
    }

    /// Returns the slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.b
    }

    /// Quantity demanded at price `p`.
    #[must_use]
    pub fn quantity_at(&self, p: f64) -> f64 {
        self.a - self.b * p
    }

    /// Willingness-to-pay at quantity `q` (the inverse curve).
    #[must_use]
    pub fn price_at(&self, q: f64) -> f64 {
        (self.a - q) / self.b
    }

    /// The curve as a polynomial in the price symbol: `a − b·p`.
    #[must_use]
    pub fn equation(&self, price_symbol: &str) -> Polynomial {
        Polynomial::from_slices(&[self.a, -self.b], price_symbol, &[0.0, 1.0])
    }

    /// The inverse curve as a polynomial in the quantity symbol:
    /// `a/b − (1/b)·q`.
    #[must_use]
    pub fn inverse_equation(&self, quantity_symbol: &str) -> Polynomial {
        Polynomial::from_slices(
            &[self.a / self.b, -1.0 / self.b],
            quantity_symbol,
            &[0.0, 1.0],
        )
    }
}

/// Linear supply `q_s = a + b·p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSupply {
    a: f64,
    b: f64,
}

impl LinearSupply {
    /// Creates a supply curve with intercept `a` and slope `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a >= 0` and `b > 0`.
    pub fn new(a: f64, b: f64) -> Result<Self, ModelError> {
        if !(a >= 0.0) {
            return Err(ModelError::BadParameter(
                "supply intercept must be non-negative",
            ));
        }
        if !(b > 0.0) {
            return Err(ModelError::BadParameter("supply slope must be positive"));
        }
        Ok(Self { a, b })
    }

    /// Returns the intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.a
    }

    /// Returns the slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.b
    }

    /// Quantity supplied at price `p`.
    #[must_use]
    pub fn quantity_at(&self, p: f64) -> f64 {
        self.a + self.b * p
    }

    /// Marginal cost at quantity `q` (the inverse curve).
    #[must_use]
    pub fn price_at(&self, q: f64) -> f64 {
        (q - self.a) / self.b
    }

    /// The curve as a polynomial in the price symbol: `a + b·p`.
    ///
    /// A zero intercept drops out of the rendering.
    #[must_use]
    pub fn equation(&self, price_symbol: &str) -> Polynomial {
        Polynomial::from_slices(&[self.a, self.b], price_symbol, &[0.0, 1.0])
    }

    /// The inverse curve as a polynomial in the quantity symbol:
    /// `(1/b)·q − a/b`.
    #[must_use]
    pub fn inverse_equation(&self, quantity_symbol: &str) -> Polynomial {
        Polynomial::from_slices(
            &[1.0 / self.b, -self.a / self.b],
            quantity_symbol,
            &[1.0, 0.0],
        )
    }
}

/// Constant-elasticity demand `p = a·q^k` with `k < 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialDemand {
    a: f64,
    k: f64,
}

impl ExponentialDemand {
    /// Creates the curve.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a > 0` and `k < 0`.
    pub fn new(a: f64, k: f64) -> Result<Self, ModelError> {
        if !(a > 0.0) {
            return Err(ModelError::BadParameter("demand scale must be positive"));
        }
        if !(k < 0.0) {
            return Err(ModelError::BadParameter(
                "demand elasticity exponent must be negative",
            ));
        }
        Ok(Self { a, k })
    }

    /// Returns the scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.a
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.k
    }

    /// Quantity demanded at price `p`: `(1/a)^{1/k}·p^{1/k}`.
    #[must_use]
    pub fn quantity_at(&self, p: f64) -> f64 {
        (1.0 / self.a).powf(1.0 / self.k) * p.powf(1.0 / self.k)
    }

    /// Price at quantity `q`: `a·q^k`.
    #[must_use]
    pub fn price_at(&self, q: f64) -> f64 {
        self.a * q.powf(self.k)
    }

    /// The curve as a term in the price symbol: `c·p^{1/k}`.
    #[must_use]
    pub fn equation(&self, price_symbol: &str) -> Term {
        let c = (1.0 / self.a).powf(1.0 / self.k);
        Term::new(c, price_symbol, 1.0 / self.k)
    }

    /// The inverse curve as a term in the quantity symbol: `a·q^k`.
    #[must_use]
    pub fn inverse_equation(&self, quantity_symbol: &str) -> Term {
        Term::new(self.a, quantity_symbol, self.k)
    }
}

/// Constant-elasticity supply `p = a·q^k` with `k > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialSupply {
    a: f64,
    k: f64,
}

impl ExponentialSupply {
    /// Creates the curve.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::BadParameter`] unless `a > 0` and `k > 0`.
    pub fn new(a: f64, k: f64) -> Result<Self, ModelError> {
        if !(a > 0.0) {
            return Err(ModelError::BadParameter("supply scale must be positive"));
        }
        if !(k > 0.0) {
            return Err(ModelError::BadParameter(
                "supply elasticity exponent must be positive",
            ));
        }
        Ok(Self { a, k })
    }

    /// Returns the scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.a
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.k
    }

    /// Quantity supplied at price `p`.
    #[must_use]
    pub fn quantity_at(&self, p: f64) -> f64 {
        (1.0 / self.a).powf(1.0 / self.k) * p.powf(1.0 / self.k)
    }

    /// Price at quantity `q`.
    #[must_use]
    pub fn price_at(&self, q: f64) -> f64 {
        self.a * q.powf(self.k)
    }

    /// The curve as a term in the price symbol.
    #[must_use]
    pub fn equation(&self, price_symbol: &str) -> Term {
        let c = (1.0 / self.a).powf(1.0 / self.k);
        Term::new(c, price_symbol, 1.0 / self.k)
    }

    /// The inverse curve as a term in the quantity symbol.
    #[must_use]
    pub fn inverse_equation(&self, quantity_symbol: &str) -> Term {
        Term::new(self.a, quantity_symbol, self.k)
    }
}
