//! Choice sets and their formatting.

use oikos_print::Term;
use oikos_rational::{FracStyle, Fraction};

/// How numeric choices are formatted for display and collision checks.
#[derive(Clone, Copy, Debug)]
pub struct ChoiceFormat {
    /// Largest denominator rendered as a fraction.
    pub max_denom: i64,
    /// Fraction layout.
    pub style: FracStyle,
}

impl Default for ChoiceFormat {
    fn default() -> Self {
        Self {
            max_denom: 5,
            style: FracStyle::Inline,
        }
    }
}

impl ChoiceFormat {
    /// Formats a value under this policy.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        Fraction::approx(value, self.max_denom).render(self.style)
    }
}

/// One answer option: the numeric value and its display string.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    /// The numeric value.
    pub value: f64,
    /// The formatted display string.
    pub text: String,
}

/// An ordered list of numeric answer options with the correct one marked.
///
/// Invariants upheld by the generators: entries are pairwise distinct after
/// formatting, and exactly one entry is the correct answer.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceSet {
    choices: Vec<Choice>,
    correct: usize,
}

impl ChoiceSet {
    pub(crate) fn new(choices: Vec<Choice>, correct: usize) -> Self {
        debug_assert!(correct < choices.len());
        Self { choices, correct }
    }

    /// The options in display order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Index of the correct answer within [`choices`](Self::choices).
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// The correct answer.
    #[must_use]
    pub fn correct(&self) -> &Choice {
        &self.choices[self.correct]
    }

    /// Number of options (correct answer included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True if the set is empty (never produced by the generators).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The display strings in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.text.as_str()).collect()
    }
}

/// An ordered list of symbolic (term) answer options with the correct one
/// marked.
#[derive(Clone, Debug, PartialEq)]
pub struct TermChoiceSet {
    choices: Vec<(Term, String)>,
    correct: usize,
}

impl TermChoiceSet {
    pub(crate) fn new(choices: Vec<(Term, String)>, correct: usize) -> Self {
        debug_assert!(correct < choices.len());
        Self { choices, correct }
    }

    /// The options (term and rendering) in display order.
    #[must_use]
    pub fn choices(&self) -> &[(Term, String)] {
        &self.choices
    }

    /// Index of the correct answer within [`choices`](Self::choices).
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Number of options (correct answer included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True if the set is empty (never produced by the generators).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
