//! Keyword index
//!
//! Holds the keyword list a caller classifies against and answers two
//! questions about a user word: which keyword it is (exactly, or else via
//! the fast matcher), and how do all keywords rank by composite score.

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::Serialize;
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::Result;
use crate::matcher::TypoMatcher;
use crate::shorthand::expand_shorthand;

/// A keyword with its composite score against a user word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedKeyword {
    pub keyword: String,
    pub score: f64,
}

/// Sorted, deduplicated, lowercase keyword vocabulary
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    keywords: Vec<String>,
    index_hash: String,
    matcher: TypoMatcher,
}

impl KeywordIndex {
    /// Create an empty index with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with custom configuration
    pub fn with_config(config: MatchConfig) -> Result<Self> {
        Ok(Self {
            keywords: Vec::new(),
            index_hash: String::new(),
            matcher: TypoMatcher::with_config(config)?,
        })
    }

    /// Replace the vocabulary.
    /// Returns (keyword_count, hash)
    pub fn rebuild<I, S>(&mut self, keywords: I) -> (usize, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort();
        keywords.dedup();

        let hash = compute_hash(&keywords);
        let count = keywords.len();
        debug!(count, hash = %hash, "keyword index rebuilt");

        self.keywords = keywords;
        self.index_hash = hash.clone();

        (count, hash)
    }

    /// Single-word keyword matching `word`: an exact keyword wins, otherwise
    /// the first one the fast matcher accepts. Shorthand such as "u" is
    /// expanded before matching.
    pub fn first_match(&self, word: &str) -> Option<&str> {
        let word = expand_shorthand(word).unwrap_or(word);

        let folded = word.trim().to_lowercase();
        if !folded.contains(' ') {
            if let Ok(idx) = self.keywords.binary_search(&folded) {
                return Some(&self.keywords[idx]);
            }
        }

        self.keywords
            .iter()
            .filter(|k| !k.contains(' '))
            .find(|k| self.matcher.is_match(word, k))
            .map(String::as_str)
    }

    /// Keywords ranked by composite score against `word`.
    ///
    /// `limit` and `min_score` default to the configured `max_results` and
    /// `min_score`. Ties are broken alphabetically.
    pub fn rank(
        &self,
        word: &str,
        limit: Option<usize>,
        min_score: Option<f64>,
    ) -> Vec<RankedKeyword> {
        let config = self.matcher.config();
        let limit = limit.unwrap_or(config.max_results);
        let min_score = min_score.unwrap_or(config.min_score);

        let mut ranked: Vec<RankedKeyword> = self
            .keywords
            .iter()
            .map(|k| RankedKeyword {
                keyword: k.clone(),
                score: self.matcher.score(word, k),
            })
            .filter(|r| r.score >= min_score)
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn index_hash(&self) -> &str {
        &self.index_hash
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

fn compute_hash(keywords: &[String]) -> String {
    let mut hasher = AHasher::default();
    for k in keywords {
        k.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
