//! Numeric perturbation policies.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::choice::{Choice, ChoiceFormat, ChoiceSet};

/// Additive offsets escalate up to this multiple of `delta` before the
/// search gives up and returns a short set.
const MAX_ADDITIVE_STEP: i64 = 8;

/// How wrong answers are derived from the correct one.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericPolicy {
    /// Candidates `correct ± k·delta` for escalating small integers `k`.
    Additive {
        /// Base offset between adjacent candidates.
        delta: f64,
    },
    /// Candidates `correct · f` for each factor `f`.
    Multiplicative {
        /// Factor set, tried in random order.
        factors: SmallVec<[f64; 4]>,
    },
}

impl NumericPolicy {
    /// Additive perturbation with the given base offset.
    #[must_use]
    pub fn additive(delta: f64) -> Self {
        Self::Additive { delta }
    }

    /// Multiplicative perturbation with the default factor set.
    #[must_use]
    pub fn multiplicative() -> Self {
        Self::Multiplicative {
            factors: smallvec![0.5, 2.0, 1.5, 0.25],
        }
    }
}

/// Synthesizes `count` wrong answers around `correct` and returns the full
/// choice set with the correct answer marked.
///
/// Candidates that format to an already-used display string are skipped
/// (collision check on the formatted text, not the raw float); when the
/// correct answer is positive, non-positive candidates are skipped as
/// implausible. The escalation schedule is fixed, so the search always
/// terminates — if it exhausts, the set simply carries fewer distractors.
///
/// With `sort`, choices are returned in ascending numeric order; otherwise
/// they are shuffled. Either way [`ChoiceSet::correct_index`] reports where
/// the correct answer landed. All randomness comes from `rng`.
pub fn generate_numeric<R: Rng>(
    correct: f64,
    count: usize,
    policy: &NumericPolicy,
    format: &ChoiceFormat,
    sort: bool,
    rng: &mut R,
) -> ChoiceSet {
    let correct_text = format.format(correct);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(correct_text.clone());

    let mut distractors: Vec<Choice> = Vec::with_capacity(count);
    match policy {
        NumericPolicy::Additive { delta } => {
            'escalate: for k in 1..=MAX_ADDITIVE_STEP {
                let offset = k as f64 * delta;
                let mut signs = [1.0, -1.0];
                signs.shuffle(rng);
                for s in signs {
                    push_if_fresh(correct + s * offset, correct, format, &mut seen, &mut distractors);
                    if distractors.len() == count {
                        break 'escalate;
                    }
                }
            }
        }
        NumericPolicy::Multiplicative { factors } => {
            let mut order: Vec<f64> = factors.to_vec();
            order.shuffle(rng);
            for f in order {
                push_if_fresh(correct * f, correct, format, &mut seen, &mut distractors);
                if distractors.len() == count {
                    break;
                }
            }
        }
    }

    let mut choices = distractors;
    choices.push(Choice {
        value: correct,
        text: correct_text.clone(),
    });
    if sort {
        choices.sort_by(|a, b| a.value.total_cmp(&b.value));
    } else {
        choices.shuffle(rng);
    }
    // The correct text is unique in the set, so this always finds it
    let correct_index = choices
        .iter()
        .position(|c| c.text == correct_text)
        .unwrap_or(0);
    ChoiceSet::new(choices, correct_index)
}

fn push_if_fresh(
    candidate: f64,
    correct: f64,
    format: &ChoiceFormat,
    seen: &mut FxHashSet<String>,
    out: &mut Vec<Choice>,
) {
    if !candidate.is_finite() {
        return;
    }
    if correct > 0.0 && candidate <= 0.0 {
        return;
    }
    let text = format.format(candidate);
    if seen.insert(text.clone()) {
        out.push(Choice {
            value: candidate,
            text,
        });
    }
}
