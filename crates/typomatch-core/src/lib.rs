//! Typo-tolerant keyword matching
//!
//! Decides whether a user-typed word is a likely typo or variant of a
//! keyword. Two entry points share the same edit-distance kernel:
//!
//! - [`is_match`] - cheap boolean gate (first letter, length, Levenshtein
//!   ratio) for the classification hot path
//! - [`score`] - weighted 0.0-1.0 score combining edit distance, keyboard
//!   proximity, phonetic similarity and repeated letters, for ranking and
//!   diagnostics
//!
//! Everything is pure and synchronous; lookup tables are immutable statics.
//!
//! # Example
//!
//! ```rust
//! use typomatch_core::{damerau_levenshtein, is_match, levenshtein, score};
//!
//! assert!(is_match("helo", "hello"));
//! assert!(!is_match("thx", "thanks"));
//!
//! assert_eq!(levenshtein("teh", "the"), 2);
//! assert_eq!(damerau_levenshtein("teh", "the"), 1);
//!
//! let s = score("heyy", "hey");
//! assert!(s > 0.5 && s <= 0.65);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod keyboard;
pub mod keywords;
pub mod matcher;
pub mod phonetic;
pub mod repeats;
pub mod score;
pub mod shorthand;
pub mod telemetry;

// Re-export main types at crate root
pub use config::MatchConfig;
pub use distance::{damerau_levenshtein, levenshtein, EditMetric};
pub use error::{ConfigError, Result};
pub use keyboard::{are_adjacent, KeyboardLayout};
pub use keywords::{KeywordIndex, RankedKeyword};
pub use matcher::{is_match, is_match_with_threshold, TypoMatcher};
pub use phonetic::are_phonetically_similar;
pub use repeats::collapse_repeats;
pub use score::{score, score_breakdown, ScoreBreakdown, ScoreFactor, ScoreOutcome};
pub use shorthand::expand_shorthand;
