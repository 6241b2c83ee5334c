//! Composite typo score
//!
//! Weighted multi-factor similarity in [0.0, 1.0]:
//!
//! | Factor               | Weight | Active when        |
//! |----------------------|--------|--------------------|
//! | `first_letter`       | 15     | always             |
//! | `length`             | 10     | always             |
//! | `edit_distance`      | 30     | always             |
//! | `keyboard_proximity` | 20     | equal lengths only |
//! | `phonetic`           | 15     | equal lengths only |
//! | `repetition`         | 10     | always             |
//!
//! The denominator is always the full 100 points, so words of different
//! lengths can never score above 0.65.
//!
//! # Example
//!
//! ```rust
//! use typomatch_core::score;
//!
//! assert_eq!(score("Hello", "hello"), 1.0);
//! assert!(score("heyy", "hey") > score("hi", "hey"));
//! ```

pub mod factors;

use serde::Serialize;

use crate::keyboard::KeyboardLayout;

pub use factors::{ScoreFactor, TOTAL_WEIGHT};

/// How a breakdown was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Words are equal after trimming and case folding
    Exact,
    /// One of the words is empty after trimming
    Empty,
    /// Factors were evaluated and summed
    Weighted,
}

/// Per-factor explanation of a composite score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub outcome: ScoreOutcome,
    pub factors: Vec<ScoreFactor>,
}

impl ScoreBreakdown {
    fn shortcut(outcome: ScoreOutcome) -> Self {
        Self {
            outcome,
            factors: Vec::new(),
        }
    }

    /// Points earned across all factors
    pub fn earned(&self) -> f64 {
        self.factors.iter().map(|f| f.earned).sum()
    }

    /// Points available across all factors
    pub fn possible(&self) -> f64 {
        self.factors.iter().map(|f| f.weight).sum()
    }

    /// Look up a factor by name
    pub fn factor(&self, name: &str) -> Option<&ScoreFactor> {
        self.factors.iter().find(|f| f.name == name)
    }

    /// Normalized score in [0.0, 1.0]
    pub fn total(&self) -> f64 {
        match self.outcome {
            ScoreOutcome::Exact => 1.0,
            ScoreOutcome::Empty => 0.0,
            ScoreOutcome::Weighted => {
                let possible = self.possible();
                if possible > 0.0 {
                    (self.earned() / possible).clamp(0.0, 1.0)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Composite similarity of `user_word` to `keyword`, using QWERTY adjacency.
/// Both words are trimmed and lowercased first.
pub fn score(user_word: &str, keyword: &str) -> f64 {
    score_breakdown(user_word, keyword).total()
}

/// Factor-by-factor breakdown of [`score`].
pub fn score_breakdown(user_word: &str, keyword: &str) -> ScoreBreakdown {
    score_breakdown_with_layout(user_word, keyword, KeyboardLayout::Qwerty)
}

/// Like [`score_breakdown`] with an explicit layout for the keyboard factors.
pub fn score_breakdown_with_layout(
    user_word: &str,
    keyword: &str,
    layout: KeyboardLayout,
) -> ScoreBreakdown {
    let user = user_word.trim().to_lowercase();
    let keyword = keyword.trim().to_lowercase();

    if user == keyword {
        return ScoreBreakdown::shortcut(ScoreOutcome::Exact);
    }
    if user.is_empty() || keyword.is_empty() {
        return ScoreBreakdown::shortcut(ScoreOutcome::Empty);
    }

    ScoreBreakdown {
        outcome: ScoreOutcome::Weighted,
        factors: vec![
            factors::first_letter(&user, &keyword, layout),
            factors::length(&user, &keyword),
            factors::edit_distance(&user, &keyword),
            factors::keyboard_proximity(&user, &keyword, layout),
            factors::phonetic(&user, &keyword),
            factors::repetition(&user, &keyword),
        ],
    }
}
