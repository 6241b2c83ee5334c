//! Edit distance kernel
//!
//! Two dynamic-programming distances over Unicode scalar values:
//!
//! - [`levenshtein`]: insert / delete / substitute, each costing 1
//! - [`damerau_levenshtein`]: the above plus adjacent transposition costing 1
//!   (unrestricted variant, so a transposed pair may be edited further)
//!
//! Both fill the full matrix; inputs are expected to be short words.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Classic Levenshtein distance between `a` and `b`.
///
/// ```
/// use typomatch_core::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("teh", "the"), 2);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut matrix = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        matrix[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix[n][m]
}

/// Damerau-Levenshtein distance between `a` and `b`, counting a swap of two
/// adjacent characters as a single edit.
///
/// ```
/// use typomatch_core::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("teh", "the"), 1);
/// assert_eq!(damerau_levenshtein("ca", "abc"), 2);
/// ```
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    damerau_levenshtein_chars(&a, &b)
}

pub(crate) fn damerau_levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (n, m) = (a.len(), b.len());
    let max_dist = n + m;

    // Shifted by one: row/column 0 hold the sentinel, row/column 1 the
    // usual empty-prefix base cases.
    let mut h = vec![vec![0usize; m + 2]; n + 2];
    h[0][0] = max_dist;
    for i in 0..=n {
        h[i + 1][0] = max_dist;
        h[i + 1][1] = i;
    }
    for j in 0..=m {
        h[0][j + 1] = max_dist;
        h[1][j + 1] = j;
    }

    // Last row of `a` in which each character was seen.
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=n {
        // Last column of `b` in this row that matched a[i - 1].
        let mut last_match_col = 0;
        for j in 1..=m {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            h[i + 1][j + 1] = (h[i][j] + cost) // substitution
                .min(h[i + 1][j] + 1) // insertion
                .min(h[i][j + 1] + 1) // deletion
                .min(h[k][l] + (i - k - 1) + 1 + (j - l - 1)); // transposition
        }
        last_row.insert(a[i - 1], i);
    }

    h[n + 1][m + 1]
}

/// Selects which distance a caller wants without duplicating call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMetric {
    #[default]
    Levenshtein,
    DamerauLevenshtein,
}

impl EditMetric {
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            Self::Levenshtein => levenshtein(a, b),
            Self::DamerauLevenshtein => damerau_levenshtein(a, b),
        }
    }

    /// `1 - distance / max_len`, or 1.0 when both strings are empty.
    pub fn similarity(self, a: &str, b: &str) -> f64 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - self.distance(a, b) as f64 / max_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "xyz"), 3);
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("cat", "hat"), 1);
        assert_eq!(levenshtein("cat", "cats"), 1);
        assert_eq!(levenshtein("cats", "cat"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_transposition_costs_two_without_damerau() {
        assert_eq!(levenshtein("teh", "the"), 2);
        assert_eq!(damerau_levenshtein("teh", "the"), 1);
    }

    #[test]
    fn test_damerau_basics() {
        assert_eq!(damerau_levenshtein("", ""), 0);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        assert_eq!(damerau_levenshtein("hello", "hello"), 0);
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("thnaks", "thanks"), 1);
    }

    #[test]
    fn test_damerau_transposition_with_further_edits() {
        // The restricted (OSA) variant gives 3 here.
        assert_eq!(damerau_levenshtein("ca", "abc"), 2);
        assert_eq!(damerau_levenshtein("ab", "bca"), 2);
    }

    #[test]
    fn test_unicode_is_per_char() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(damerau_levenshtein("éa", "aé"), 1);
    }

    #[test]
    fn test_edit_metric_selects_algorithm() {
        assert_eq!(EditMetric::Levenshtein.distance("teh", "the"), 2);
        assert_eq!(EditMetric::DamerauLevenshtein.distance("teh", "the"), 1);

        let plain = EditMetric::Levenshtein.similarity("helo", "hello");
        assert!((plain - 0.8).abs() < 1e-9);
        let swapped = EditMetric::DamerauLevenshtein.similarity("teh", "the");
        assert!((swapped - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(EditMetric::default().similarity("", ""), 1.0);
    }
}
