//! Fast typo matcher
//!
//! The boolean gate used inline while classifying messages. Deliberately
//! cheaper than the composite score: exact first letter, bounded length
//! difference, then a plain Levenshtein ratio against a threshold.
//! Keyboard, phonetic and repetition signals are ignored here.

use tracing::trace;

use crate::config::{MatchConfig, DEFAULT_MAX_LENGTH_DIFF, DEFAULT_THRESHOLD};
use crate::distance::levenshtein_chars;
use crate::error::Result;
use crate::score::{score_breakdown_with_layout, ScoreBreakdown};

/// True if `user_word` is likely `keyword` or a typo of it, using the
/// default 0.80 threshold.
///
/// ```
/// use typomatch_core::is_match;
///
/// assert!(is_match("helo", "hello"));
/// assert!(!is_match("thx", "thanks"));
/// ```
pub fn is_match(user_word: &str, keyword: &str) -> bool {
    is_match_with_threshold(user_word, keyword, DEFAULT_THRESHOLD)
}

/// [`is_match`] with an explicit ratio threshold.
pub fn is_match_with_threshold(user_word: &str, keyword: &str, threshold: f64) -> bool {
    gate(user_word, keyword, threshold, DEFAULT_MAX_LENGTH_DIFF)
}

fn gate(user_word: &str, keyword: &str, threshold: f64, max_length_diff: usize) -> bool {
    let user = user_word.trim().to_lowercase();
    let keyword = keyword.trim().to_lowercase();

    if user == keyword {
        return true;
    }
    if user.is_empty() || keyword.is_empty() {
        return false;
    }

    let u: Vec<char> = user.chars().collect();
    let k: Vec<char> = keyword.chars().collect();

    if u[0] != k[0] {
        trace!(user = %user, keyword = %keyword, "rejected: first letter");
        return false;
    }

    if u.len().abs_diff(k.len()) > max_length_diff {
        trace!(user = %user, keyword = %keyword, "rejected: length difference");
        return false;
    }

    let distance = levenshtein_chars(&u, &k);
    let ratio = 1.0 - distance as f64 / u.len().max(k.len()) as f64;
    let accepted = ratio >= threshold;
    trace!(user = %user, keyword = %keyword, distance, ratio, accepted, "edit ratio");
    accepted
}

/// Matcher bound to a validated [`MatchConfig`]
#[derive(Debug, Clone, Default)]
pub struct TypoMatcher {
    config: MatchConfig,
}

impl TypoMatcher {
    /// Create a matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration, rejecting out-of-range ratios
    pub fn with_config(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Fast boolean match using the configured threshold and length gate
    pub fn is_match(&self, user_word: &str, keyword: &str) -> bool {
        gate(
            user_word,
            keyword,
            self.config.threshold,
            self.config.max_length_diff,
        )
    }

    /// Composite score using the configured keyboard layout
    pub fn score(&self, user_word: &str, keyword: &str) -> f64 {
        self.score_breakdown(user_word, keyword).total()
    }

    pub fn score_breakdown(&self, user_word: &str, keyword: &str) -> ScoreBreakdown {
        score_breakdown_with_layout(user_word, keyword, self.config.layout)
    }
}
