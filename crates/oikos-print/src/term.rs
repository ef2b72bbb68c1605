//! Single-term rendering.

use oikos_rational::{strip_leading_sign, FracStyle, Fraction};

/// Rendering options shared by the term and polynomial printers.
#[derive(Clone, Copy, Debug)]
pub struct PrintOptions {
    /// Largest denominator shown as a fraction; beyond it, decimal fallback.
    pub max_denom: i64,
    /// Strip a single leading `+` from the rendered output.
    pub strip_plus: bool,
    /// Strip a single leading `-` from the rendered output.
    pub strip_minus: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            max_denom: 5,
            strip_plus: true,
            strip_minus: false,
        }
    }
}

impl PrintOptions {
    /// Options with a given denominator bound and the default sign policy.
    #[must_use]
    pub fn with_max_denom(max_denom: i64) -> Self {
        Self {
            max_denom,
            ..Self::default()
        }
    }

    /// Keeps the leading `+` (used for every non-leading term of a sum).
    #[must_use]
    pub fn keep_signs(self) -> Self {
        Self {
            strip_plus: false,
            strip_minus: false,
            ..self
        }
    }
}

/// An algebraic term `coefficient · symbol ^ exponent`.
///
/// The symbol may itself be a compound sub-expression (e.g. `"pq"`); the
/// printer treats it as opaque text. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    symbol: String,
    exponent: f64,
}

impl Term {
    /// Creates a term `c·x^p`.
    #[must_use]
    pub fn new(coefficient: f64, symbol: impl Into<String>, exponent: f64) -> Self {
        Self {
            coefficient,
            symbol: symbol.into(),
            exponent,
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns a copy with the coefficient replaced.
    #[must_use]
    pub fn with_coefficient(&self, coefficient: f64) -> Self {
        Self::new(coefficient, self.symbol.clone(), self.exponent)
    }

    /// Returns a copy with the exponent replaced.
    #[must_use]
    pub fn with_exponent(&self, exponent: f64) -> Self {
        Self::new(self.coefficient, self.symbol.clone(), exponent)
    }

    /// Evaluates the term at a value of its symbol.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }

    /// Renders the term according to `opts`.
    ///
    /// Rules in priority order:
    /// 1. zero coefficient renders empty (the term vanishes from a sum);
    /// 2. zero exponent renders the coefficient alone, no symbol;
    /// 3. exponent one omits the `^{…}` notation;
    /// 4. coefficient `±1` renders the bare signed symbol, no numeral;
    /// 5. otherwise `{sign}{coef}{symbol}^{exp}`, coefficient stacked,
    ///    exponent inline.
    #[must_use]
    pub fn render(&self, opts: PrintOptions) -> String {
        let out = self.render_signed(opts.max_denom);
        strip_leading_sign(out, opts.strip_plus, opts.strip_minus)
    }

    /// Renders with an explicit leading sign, for use inside a sum.
    ///
    /// Returns the empty string for a vanished (zero-coefficient) term.
    #[must_use]
    pub fn render_signed(&self, max_denom: i64) -> String {
        if self.coefficient == 0.0 {
            return String::new();
        }
        let coef = Fraction::approx(self.coefficient, max_denom);
        if self.exponent == 0.0 {
            return coef.render_signed(FracStyle::Stacked);
        }
        let xp = if self.exponent == 1.0 {
            self.symbol.clone()
        } else {
            let exp = Fraction::approx(self.exponent, max_denom);
            format!("{}^{{{}}}", self.symbol, exp.render(FracStyle::Inline))
        };
        if self.coefficient == -1.0 {
            format!("-{xp}")
        } else if self.coefficient == 1.0 {
            format!("+{xp}")
        } else {
            format!("{}{}", coef.render_signed(FracStyle::Stacked), xp)
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(c: f64, x: &str, p: f64) -> String {
        Term::new(c, x, p).render(PrintOptions::default())
    }

    #[test]
    fn zero_coefficient_vanishes() {
        assert_eq!(render(0.0, "x", 2.0), "");
        assert_eq!(render(0.0, "q", 0.5), "");
    }

    #[test]
    fn zero_exponent_hides_symbol() {
        assert_eq!(render(3.0, "x", 0.0), "3");
        assert!(!render(-2.5, "x", 0.0).contains('x'));
    }

    #[test]
    fn unit_exponent_hides_notation() {
        assert_eq!(render(2.0, "q", 1.0), "2q");
        assert_eq!(render(-3.0, "p", 1.0), "-3p");
    }

    #[test]
    fn unit_coefficient_hides_numeral() {
        assert_eq!(render(1.0, "q", 1.0), "q");
        assert_eq!(render(-1.0, "q", 1.0), "-q");
        assert_eq!(render(-1.0, "q", 2.0), "-q^{2}");
    }

    #[test]
    fn general_term() {
        assert_eq!(render(2.0, "x", 2.0), "2x^{2}");
        assert_eq!(render(0.5, "x", 0.5), "\\frac{1}{2}x^{1/2}");
        assert_eq!(render(-0.5, "q", -2.0), "-\\frac{1}{2}q^{-2}");
    }

    #[test]
    fn leading_sign_policy() {
        let t = Term::new(2.0, "x", 1.0);
        assert_eq!(t.render(PrintOptions::default()), "2x");
        assert_eq!(t.render(PrintOptions::default().keep_signs()), "+2x");
        let neg = Term::new(-2.0, "x", 1.0);
        let strip_neg = PrintOptions {
            strip_minus: true,
            ..PrintOptions::default()
        };
        assert_eq!(neg.render(strip_neg), "2x");
    }

    #[test]
    fn compound_symbol_is_opaque() {
        assert_eq!(render(1.0, "pq", 1.0), "pq");
    }

    #[test]
    fn eval_matches_algebra() {
        let t = Term::new(2.0, "q", 2.0);
        assert!((t.eval(3.0) - 18.0).abs() < 1e-12);
    }
}
