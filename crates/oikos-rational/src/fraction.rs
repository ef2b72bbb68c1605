//! Bounded-denominator fractions.
//!
//! Every displayed coefficient and exponent in a generated problem passes
//! through [`Fraction`]: values that reduce to a small fraction are shown as
//! one, everything else degrades to fixed-point decimal. Degradation is
//! silent; construction never fails.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Tolerance for treating a float as a given fraction or integer.
pub const TOLERANCE: f64 = 1e-4;

/// Largest float magnitude we attempt to canonicalize at all.
const MAX_MAGNITUDE: f64 = 1e15;

/// How a non-integer fraction is laid out in rendered output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FracStyle {
    /// `n/d` on one line, used inside exponents.
    #[default]
    Inline,
    /// `\frac{n}{d}`, used for standalone coefficients.
    Stacked,
}

impl FracStyle {
    /// Returns a short name for the style.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            FracStyle::Inline => "inline",
            FracStyle::Stacked => "stacked",
        }
    }
}

/// A real value canonicalized as a reduced fraction with a bounded
/// denominator.
///
/// When the value admits a reduced `n/d` with `d <= max_denom` within
/// [`TOLERANCE`], the fraction is exact and renders as `n` or `n/d`.
/// Otherwise the raw value is retained and rendering falls back to
/// fixed-point decimal. Immutable once constructed.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    value: f64,
    numerator: i64,
    denominator: i64,
    exact: bool,
}

impl Fraction {
    /// Canonicalizes `value` with denominators up to `max_denom`.
    ///
    /// Never fails: values that are irrational at this precision (or
    /// non-finite) produce an inexact fraction whose rendering is the
    /// decimal fallback.
    #[must_use]
    pub fn approx(value: f64, max_denom: i64) -> Self {
        if let Some((n, d)) = best_within(value, max_denom.max(1)) {
            return Self {
                value,
                numerator: n,
                denominator: d,
                exact: true,
            };
        }
        let numerator = if value.is_finite() && value.abs() < MAX_MAGNITUDE {
            value.round() as i64
        } else {
            0
        };
        Self {
            value,
            numerator,
            denominator: 1,
            exact: false,
        }
    }

    /// Creates an exact fraction from numerator and denominator, reduced.
    ///
    /// The sign is carried by the numerator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_parts(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        let sign = if denominator < 0 { -1 } else { 1 };
        let n = sign * numerator / g;
        let d = denominator.abs() / g;
        Self {
            value: n as f64 / d as f64,
            numerator: n,
            denominator: d,
            exact: true,
        }
    }

    /// Creates an exact integer fraction (denominator = 1).
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::from_parts(n, 1)
    }

    /// Returns the underlying real value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns true if the value was canonicalized to an exact fraction.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns true if this is an exact integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.exact && self.denominator == 1
    }

    /// Returns true if the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.value == 0.0 {
            0
        } else if self.value > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Renders the magnitude (no sign) in the given style.
    ///
    /// Exact integers render plain (`"3"`, never `"3/1"`); exact fractions
    /// render `"3/4"` or `"\frac{3}{4}"`; inexact values render as
    /// fixed-point decimal.
    #[must_use]
    pub fn render_abs(&self, style: FracStyle) -> String {
        if !self.exact {
            return decimal(self.value.abs());
        }
        let n = self.numerator.unsigned_abs();
        if self.denominator == 1 {
            return n.to_string();
        }
        match style {
            FracStyle::Inline => format!("{}/{}", n, self.denominator),
            FracStyle::Stacked => format!("\\frac{{{}}}{{{}}}", n, self.denominator),
        }
    }

    /// Renders with an explicit leading sign (`+` for non-negative).
    ///
    /// Callers strip the sign afterwards via [`strip_leading_sign`]; the
    /// printers rely on every term carrying exactly one sign character.
    #[must_use]
    pub fn render_signed(&self, style: FracStyle) -> String {
        let sign = if self.is_negative() { '-' } else { '+' };
        format!("{}{}", sign, self.render_abs(style))
    }

    /// Renders in the given style with the default sign policy
    /// (leading `+` stripped, leading `-` kept). Zero renders as `"0"`.
    #[must_use]
    pub fn render(&self, style: FracStyle) -> String {
        strip_leading_sign(self.render_signed(style), true, false)
    }

    /// Renders as fixed-point decimal regardless of exactness.
    ///
    /// Up to four decimal places, trailing zeros trimmed; parses back to a
    /// float within [`TOLERANCE`] of the original value.
    #[must_use]
    pub fn as_decimal(&self) -> String {
        decimal(self.value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(FracStyle::Inline))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.exact && rhs.exact {
            Self::from_parts(
                self.numerator * rhs.denominator + rhs.numerator * self.denominator,
                self.denominator * rhs.denominator,
            )
        } else {
            Self::approx(self.value + rhs.value, 1)
        }
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.exact && rhs.exact {
            Self::from_parts(
                self.numerator * rhs.numerator,
                self.denominator * rhs.denominator,
            )
        } else {
            Self::approx(self.value * rhs.value, 1)
        }
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if self.exact && rhs.exact && rhs.numerator != 0 {
            Self::from_parts(
                self.numerator * rhs.denominator,
                self.denominator * rhs.numerator,
            )
        } else {
            Self::approx(self.value / rhs.value, 1)
        }
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.exact {
            Self::from_parts(-self.numerator, self.denominator)
        } else {
            Self::approx(-self.value, 1)
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::integer(0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::integer(1)
    }

    fn is_one(&self) -> bool {
        self.value == 1.0
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

/// Returns true iff `a/b` is an integer within [`TOLERANCE`].
///
/// Used by validity gates for grid-alignment clauses (`is_divisible(q, 1.0)`
/// asks whether a quantity is a whole number; `unit = 0.5` asks for
/// half-unit alignment). Returns false when `b` is zero or either argument
/// is non-finite.
#[must_use]
pub fn is_divisible(a: f64, b: f64) -> bool {
    if b == 0.0 || !a.is_finite() || !b.is_finite() {
        return false;
    }
    let ratio = a / b;
    (ratio - ratio.round()).abs() <= TOLERANCE * ratio.abs().max(1.0)
}

/// Returns true iff `v` is an integer within [`TOLERANCE`].
#[must_use]
pub fn is_integer_value(v: f64) -> bool {
    is_divisible(v, 1.0)
}

/// Strips a single leading sign character according to the caller's policy.
///
/// `strip_plus` removes a leading `+` (the usual case for the first term of
/// an expression); `strip_minus` removes a leading `-` (used when the caller
/// renders the sign elsewhere, e.g. as a subtraction operator).
#[must_use]
pub fn strip_leading_sign(out: String, strip_plus: bool, strip_minus: bool) -> String {
    let stripped = match out.as_bytes().first() {
        Some(b'+') if strip_plus => &out[1..],
        Some(b'-') if strip_minus => &out[1..],
        _ => return out,
    };
    stripped.to_string()
}

/// Fixed-point decimal with up to four places, trailing zeros trimmed.
fn decimal(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let s = format!("{v:.4}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Best fraction `n/d` with `d <= max_denom` within tolerance of `v`, via
/// the continued-fraction convergent search. Convergents are already in
/// lowest terms.
fn best_within(v: f64, max_denom: i64) -> Option<(i64, i64)> {
    if !v.is_finite() || v.abs() >= MAX_MAGNITUDE {
        return None;
    }
    // Absolute tolerance: distinct fractions with denominators <= d differ
    // by at least 1/d^2, so bounds up to ~100 round-trip unambiguously.
    let tol = TOLERANCE;

    let mut x = v;
    let (mut h0, mut k0) = (1i64, 0i64);
    let (mut h1, mut k1) = (x.floor() as i64, 1i64);
    for _ in 0..64 {
        if (h1 as f64 / k1 as f64 - v).abs() <= tol {
            return Some((h1, k1));
        }
        let frac = x - x.floor();
        if frac.abs() < 1e-12 {
            break;
        }
        x = 1.0 / frac;
        let a = x.floor() as i64;
        let (h2, k2) = (a.checked_mul(h1)?.checked_add(h0)?, a * k1 + k0);
        if k2 > max_denom {
            break;
        }
        (h0, k0) = (h1, k1);
        (h1, k1) = (h2, k2);
    }
    None
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
