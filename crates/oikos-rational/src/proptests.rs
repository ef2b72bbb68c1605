//! Property-based tests for fraction canonicalization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{is_divisible, FracStyle, Fraction, TOLERANCE};

    // Strategy for denominators within the default display bound
    fn small_denom() -> impl Strategy<Value = i64> {
        1i64..=36
    }

    fn small_num() -> impl Strategy<Value = i64> {
        -500i64..=500
    }

    proptest! {
        // Round-trip: every reduced n/d within the bound comes back as (n, d)
        #[test]
        fn fraction_round_trip(n in small_num(), d in small_denom()) {
            let g = gcd(n.unsigned_abs(), d.unsigned_abs());
            let (n, d) = (n / g as i64, d / g as i64);
            let f = Fraction::approx(n as f64 / d as f64, 36);
            prop_assert!(f.is_exact());
            prop_assert_eq!((f.numerator(), f.denominator()), (n, d));
        }

        // The decimal fallback parses back close to the original value
        #[test]
        fn decimal_round_trip(v in -10_000.0f64..10_000.0) {
            let f = Fraction::approx(v, 5);
            let parsed: f64 = f.as_decimal().parse().unwrap();
            prop_assert!((parsed - v).abs() <= TOLERANCE);
        }

        // Canonicalization never errors and the fraction, when exact,
        // matches the value within tolerance
        #[test]
        fn approx_is_total_and_close(v in -1e6f64..1e6, max_denom in 1i64..=100) {
            let f = Fraction::approx(v, max_denom);
            if f.is_exact() {
                let back = f.numerator() as f64 / f.denominator() as f64;
                prop_assert!(f.denominator() <= max_denom);
                prop_assert!((back - v).abs() <= TOLERANCE);
            }
        }

        // Rendering a signed fraction always starts with exactly one sign
        #[test]
        fn signed_render_has_one_sign(v in -100.0f64..100.0) {
            let s = Fraction::approx(v, 5).render_signed(FracStyle::Inline);
            prop_assert!(s.starts_with('+') || s.starts_with('-'));
            let rest = &s[1..];
            prop_assert!(!rest.starts_with('+') && !rest.starts_with('-'));
        }

        // a*k is always divisible by a (for nonzero a)
        #[test]
        fn multiples_divide(a in 1i64..1000, k in -50i64..50) {
            prop_assert!(is_divisible((a * k) as f64, a as f64));
        }
    }

    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a.max(1)
    }
}
