//! Matcher configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::keyboard::KeyboardLayout;

/// Default ratio the fast matcher must reach to accept a word.
pub const DEFAULT_THRESHOLD: f64 = 0.80;

/// Default maximum length difference the fast matcher tolerates.
pub const DEFAULT_MAX_LENGTH_DIFF: usize = 2;

/// Configuration shared by [`TypoMatcher`](crate::TypoMatcher) and
/// [`KeywordIndex`](crate::KeywordIndex).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON/TOML table is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum edit-distance ratio for the fast matcher (0.0-1.0)
    pub threshold: f64,
    /// Words whose length differs from the keyword by more than this are rejected
    pub max_length_diff: usize,
    /// Layout used by the composite scorer's keyboard factors
    pub layout: KeyboardLayout,
    /// Minimum composite score kept when ranking keywords (0.0-1.0)
    pub min_score: f64,
    /// Maximum ranked keywords to return
    pub max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_length_diff: DEFAULT_MAX_LENGTH_DIFF,
            layout: KeyboardLayout::Qwerty,
            min_score: 0.6,
            max_results: 20,
        }
    }
}

impl MatchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_length_diff(mut self, max_length_diff: usize) -> Self {
        self.max_length_diff = max_length_diff;
        self
    }

    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Check that both ratios lie in [0.0, 1.0]. NaN is rejected.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}
