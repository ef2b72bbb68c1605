//! Signed-sum rendering of term sequences.

use oikos_rational::strip_leading_sign;

use crate::term::{PrintOptions, Term};

/// An ordered sequence of terms rendered as one signed expression.
///
/// Each term carries its own sign; rendering concatenates the non-empty
/// term renderings and strips a single leading `+` unless the options keep
/// it. Terms need not share a symbol.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from terms, in display order.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Creates a polynomial from parallel coefficient and exponent slices
    /// over a single symbol.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    #[must_use]
    pub fn from_slices(coeffs: &[f64], symbol: &str, exponents: &[f64]) -> Self {
        assert_eq!(
            coeffs.len(),
            exponents.len(),
            "coefficient and exponent slices must have equal length"
        );
        Self {
            terms: coeffs
                .iter()
                .zip(exponents)
                .map(|(&c, &p)| Term::new(c, symbol, p))
                .collect(),
        }
    }

    /// Returns the terms in display order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if every term has a zero coefficient.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient() == 0.0)
    }

    /// Evaluates the sum at a value shared by all symbols.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Renders the polynomial according to `opts`.
    ///
    /// Vanished terms contribute nothing; an all-zero polynomial renders as
    /// `"0"`. The output never contains two consecutive sign characters.
    #[must_use]
    pub fn render(&self, opts: PrintOptions) -> String {
        let mut out = String::new();
        for term in &self.terms {
            out.push_str(&term.render_signed(opts.max_denom));
        }
        if out.is_empty() {
            return "0".to_string();
        }
        strip_leading_sign(out, opts.strip_plus, opts.strip_minus)
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_signed_sum() {
        let p = Polynomial::from_slices(&[1.0, 1.0, 1.0], "x", &[0.0, 1.0, 2.0]);
        assert_eq!(p.render(PrintOptions::default()), "1+x+x^{2}");
    }

    #[test]
    fn strips_single_leading_plus_only() {
        let p = Polynomial::from_slices(&[2.0, -3.0], "q", &[1.0, 0.0]);
        assert_eq!(p.render(PrintOptions::default()), "2q-3");
        assert_eq!(p.render(PrintOptions::default().keep_signs()), "+2q-3");
    }

    #[test]
    fn leading_negative_kept_by_default() {
        let p = Polynomial::from_slices(&[-1.0, 4.0], "x", &[1.0, 0.0]);
        assert_eq!(p.render(PrintOptions::default()), "-x+4");
    }

    #[test]
    fn vanished_terms_drop_out() {
        let p = Polynomial::from_slices(&[0.0, 2.0, 0.0], "x", &[0.0, 1.0, 2.0]);
        assert_eq!(p.render(PrintOptions::default()), "2x");
    }

    #[test]
    fn all_zero_renders_zero() {
        let p = Polynomial::from_slices(&[0.0, 0.0], "x", &[0.0, 1.0]);
        assert_eq!(p.render(PrintOptions::default()), "0");
    }

    #[test]
    fn mixed_symbols() {
        let p = Polynomial::new(vec![
            Term::new(12.0, "p", 0.0),
            Term::new(-1.0, "q", 1.0),
        ]);
        assert_eq!(p.render(PrintOptions::default()), "12-q");
    }

    #[test]
    fn fractional_demand_curve() {
        // q = 12 - (1/2)p
        let p = Polynomial::from_slices(&[12.0, -0.5], "p", &[0.0, 1.0]);
        assert_eq!(p.render(PrintOptions::default()), "12-\\frac{1}{2}p");
    }

    #[test]
    fn eval_sums_terms() {
        let p = Polynomial::from_slices(&[1.0, 2.0, 3.0], "x", &[0.0, 1.0, 2.0]);
        assert!((p.eval(2.0) - 17.0).abs() < 1e-12);
    }
}
