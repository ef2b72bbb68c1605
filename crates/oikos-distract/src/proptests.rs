//! Property-based tests for distractor synthesis.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{generate_numeric, ChoiceFormat, NumericPolicy};

    fn nice_answer() -> impl Strategy<Value = f64> {
        (1i64..=200).prop_map(|n| n as f64)
    }

    proptest! {
        // The correct answer's display string appears exactly once and is
        // the one the index marks
        #[test]
        fn exactly_one_correct(correct in nice_answer(), seed in any::<u64>()) {
            let fmt = ChoiceFormat::default();
            let set = generate_numeric(
                correct,
                3,
                &NumericPolicy::additive(5.0),
                &fmt,
                true,
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            let text = fmt.format(correct);
            let hits = set.choices().iter().filter(|c| c.text == text).count();
            prop_assert_eq!(hits, 1);
            prop_assert_eq!(&set.choices()[set.correct_index()].text, &text);
        }

        // All display strings are pairwise distinct
        #[test]
        fn pairwise_distinct(correct in nice_answer(), seed in any::<u64>()) {
            let set = generate_numeric(
                correct,
                3,
                &NumericPolicy::multiplicative(),
                &ChoiceFormat::default(),
                false,
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            let mut texts = set.texts();
            let total = texts.len();
            texts.sort_unstable();
            texts.dedup();
            prop_assert_eq!(texts.len(), total);
        }

        // Sorted sets are ascending in value
        #[test]
        fn sorted_is_ascending(correct in nice_answer(), seed in any::<u64>()) {
            let set = generate_numeric(
                correct,
                3,
                &NumericPolicy::additive(2.0),
                &ChoiceFormat::default(),
                true,
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            let values: Vec<f64> = set.choices().iter().map(|c| c.value).collect();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }

        // A fixed seed reproduces the set byte for byte
        #[test]
        fn seed_determinism(correct in nice_answer(), seed in any::<u64>()) {
            let make = || generate_numeric(
                correct,
                3,
                &NumericPolicy::additive(5.0),
                &ChoiceFormat::default(),
                false,
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            prop_assert_eq!(make(), make());
        }
    }
}
