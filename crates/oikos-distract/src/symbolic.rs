//! Structural term mutation for "write the expression" questions.

use oikos_print::{PrintOptions, Term};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::choice::TermChoiceSet;

/// Synthesizes up to `count` structurally similar but wrong terms around
/// `correct` and returns the full choice set with the correct term marked.
///
/// Mutations: coefficient sign flip, exponent negation, exponent
/// increment/decrement, exponent reciprocal, coefficient reciprocal.
/// Mutations that render identically to an already-used choice are skipped
/// (collision check on the rendered string). The mutation set is closed, so
/// the search always terminates; fewer than `count` distractors may be
/// returned. The correct term is inserted at an `rng`-chosen position.
pub fn generate_symbolic<R: Rng>(
    correct: &Term,
    count: usize,
    opts: PrintOptions,
    rng: &mut R,
) -> TermChoiceSet {
    let correct_text = correct.render(opts);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(correct_text.clone());

    let mut candidates = mutations(correct);
    candidates.shuffle(rng);

    let mut choices: Vec<(Term, String)> = Vec::with_capacity(count + 1);
    for term in candidates {
        let text = term.render(opts);
        if text.is_empty() {
            continue;
        }
        if seen.insert(text.clone()) {
            choices.push((term, text));
        }
        if choices.len() == count {
            break;
        }
    }

    let correct_index = rng.gen_range(0..=choices.len());
    choices.insert(correct_index, (correct.clone(), correct_text));
    TermChoiceSet::new(choices, correct_index)
}

/// The closed set of structural mutations of a term.
fn mutations(t: &Term) -> Vec<Term> {
    let c = t.coefficient();
    let p = t.exponent();
    let mut out = vec![
        t.with_coefficient(-c),
        t.with_exponent(-p),
        t.with_exponent(p + 1.0),
        t.with_exponent(p - 1.0),
    ];
    if p != 0.0 {
        out.push(t.with_exponent(1.0 / p));
    }
    if c != 0.0 && c.abs() != 1.0 {
        out.push(t.with_coefficient(1.0 / c));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn mutates_first_order_condition_style_terms() {
        // Correct marginal utility: (1/2) x^{-1/2}
        let correct = Term::new(0.5, "x", -0.5);
        let set = generate_symbolic(&correct, 3, PrintOptions::default(), &mut rng());
        assert_eq!(set.len(), 4);
        let correct_text = correct.render(PrintOptions::default());
        let hits = set
            .choices()
            .iter()
            .filter(|(_, text)| *text == correct_text)
            .count();
        assert_eq!(hits, 1);
        assert_eq!(set.choices()[set.correct_index()].1, correct_text);
    }

    #[test]
    fn all_renderings_distinct() {
        let correct = Term::new(2.0, "q", 2.0);
        let set = generate_symbolic(&correct, 3, PrintOptions::default(), &mut rng());
        let mut texts: Vec<&str> = set.choices().iter().map(|(_, s)| s.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), set.len());
    }

    #[test]
    fn colliding_mutations_collapse() {
        // p = 1: negation and reciprocal both give -1 and 1, and
        // increment/decrement give 2 and 0; duplicates must collapse
        let correct = Term::new(1.0, "x", 1.0);
        let set = generate_symbolic(&correct, 5, PrintOptions::default(), &mut rng());
        let mut texts: Vec<&str> = set.choices().iter().map(|(_, s)| s.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), set.len());
    }

    #[test]
    fn same_seed_same_set() {
        let correct = Term::new(-1.0, "q", 2.0);
        let make = || {
            generate_symbolic(
                &correct,
                3,
                PrintOptions::default(),
                &mut ChaCha8Rng::seed_from_u64(5),
            )
        };
        assert_eq!(make(), make());
    }
}
