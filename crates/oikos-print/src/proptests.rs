//! Property-based tests for the term and polynomial printers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Polynomial, PrintOptions, Term};

    // Coefficients and exponents on the quarter grid, the range the
    // generators actually draw from
    fn grid_value() -> impl Strategy<Value = f64> {
        (-48i64..=48).prop_map(|n| n as f64 / 4.0)
    }

    fn symbol() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("x"), Just("p"), Just("q"), Just("pq")]
    }

    proptest! {
        #[test]
        fn zero_coefficient_always_empty(x in symbol(), p in grid_value()) {
            let t = Term::new(0.0, x, p);
            prop_assert_eq!(t.render(PrintOptions::default()), "");
        }

        #[test]
        fn zero_exponent_never_shows_symbol(c in grid_value(), x in symbol()) {
            let out = Term::new(c, x, 0.0).render(PrintOptions::default());
            prop_assert!(!out.contains(x));
        }

        #[test]
        fn no_double_signs(
            coeffs in proptest::collection::vec(grid_value(), 1..6),
            x in symbol(),
        ) {
            let exps: Vec<f64> = (0..coeffs.len()).map(|i| i as f64).collect();
            let out = Polynomial::from_slices(&coeffs, x, &exps)
                .render(PrintOptions::default());
            for bad in ["+-", "-+", "++", "--"] {
                prop_assert!(!out.contains(bad), "{} contains {}", out, bad);
            }
        }

        #[test]
        fn signed_term_starts_with_sign(c in grid_value(), x in symbol(), p in grid_value()) {
            let out = Term::new(c, x, p).render_signed(5);
            if !out.is_empty() {
                prop_assert!(out.starts_with('+') || out.starts_with('-'));
            }
        }

        #[test]
        fn rendering_is_deterministic(c in grid_value(), x in symbol(), p in grid_value()) {
            let t = Term::new(c, x, p);
            prop_assert_eq!(
                t.render(PrintOptions::default()),
                t.render(PrintOptions::default())
            );
        }
    }
}
