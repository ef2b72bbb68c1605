//! Gate clause vocabulary.
//!
//! Validity gates are conjunctions of small independent clauses. The
//! helpers here name the clause kinds so per-model gates read as the
//! predicate they are.

use oikos_rational::is_divisible;

/// Sign clause: the field must be strictly positive.
#[must_use]
pub fn positive(v: f64) -> bool {
    v > 0.0
}

/// Grid-alignment clause: the field must be a whole multiple of `unit`.
#[must_use]
pub fn on_grid(v: f64, unit: f64) -> bool {
    is_divisible(v, unit)
}

/// Bound clause: `min < v < max`, exclusive on both sides.
#[must_use]
pub fn within(v: f64, min: f64, max: f64) -> bool {
    v > min && v < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clauses() {
        assert!(positive(40.0));
        assert!(!positive(0.0));
        assert!(on_grid(80.0, 1.0));
        assert!(on_grid(2.5, 0.5));
        assert!(!on_grid(121.0 / 3.0, 1.0));
        assert!(within(5.0, 0.0, 10.0));
        assert!(!within(10.0, 0.0, 10.0));
    }
}
