//! Individual scoring factors
//!
//! Each factor inspects one aspect of two already case-folded words and
//! reports how many of its points were earned. Factors are independent of
//! each other and of the order they are evaluated in.

use serde::Serialize;

use crate::distance::damerau_levenshtein_chars;
use crate::keyboard::{are_adjacent, KeyboardLayout};
use crate::phonetic::are_phonetically_similar;
use crate::repeats::collapse_repeats;

pub const FIRST_LETTER_WEIGHT: f64 = 15.0;
pub const LENGTH_WEIGHT: f64 = 10.0;
pub const EDIT_DISTANCE_WEIGHT: f64 = 30.0;
pub const KEYBOARD_WEIGHT: f64 = 20.0;
pub const PHONETIC_WEIGHT: f64 = 15.0;
pub const REPETITION_WEIGHT: f64 = 10.0;

/// Sum of every factor's weight; the denominator of the composite score.
pub const TOTAL_WEIGHT: f64 = FIRST_LETTER_WEIGHT
    + LENGTH_WEIGHT
    + EDIT_DISTANCE_WEIGHT
    + KEYBOARD_WEIGHT
    + PHONETIC_WEIGHT
    + REPETITION_WEIGHT;

/// Points earned by one scoring rule out of its fixed weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreFactor {
    pub name: &'static str,
    pub weight: f64,
    pub earned: f64,
}

impl ScoreFactor {
    fn new(name: &'static str, weight: f64, earned: f64) -> Self {
        Self {
            name,
            weight,
            earned,
        }
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Full credit for the same first letter, 7 points for a neighboring key.
pub fn first_letter(user: &str, keyword: &str, layout: KeyboardLayout) -> ScoreFactor {
    let earned = match (user.chars().next(), keyword.chars().next()) {
        (Some(u), Some(k)) if u == k => FIRST_LETTER_WEIGHT,
        (Some(u), Some(k)) if are_adjacent(u, k, layout) => 7.0,
        _ => 0.0,
    };
    ScoreFactor::new("first_letter", FIRST_LETTER_WEIGHT, earned)
}

/// 10 / 6 / 2 / 0 points for a length difference of 0 / 1 / 2 / 3+.
pub fn length(user: &str, keyword: &str) -> ScoreFactor {
    let diff = user.chars().count().abs_diff(keyword.chars().count());
    let earned = match diff {
        0 => LENGTH_WEIGHT,
        1 => 6.0,
        2 => 2.0,
        _ => 0.0,
    };
    ScoreFactor::new("length", LENGTH_WEIGHT, earned)
}

/// Damerau-Levenshtein similarity ratio scaled to the factor weight.
pub fn edit_distance(user: &str, keyword: &str) -> ScoreFactor {
    let (u, k) = (chars(user), chars(keyword));
    let max_len = u.len().max(k.len());
    let earned = if max_len == 0 {
        0.0
    } else {
        let distance = damerau_levenshtein_chars(&u, &k);
        let ratio = 1.0 - distance as f64 / max_len as f64;
        ratio.max(0.0) * EDIT_DISTANCE_WEIGHT
    };
    ScoreFactor::new("edit_distance", EDIT_DISTANCE_WEIGHT, earned)
}

/// Position-by-position key proximity, only for words of equal length.
/// Equal characters count 1, neighboring keys 0.5.
pub fn keyboard_proximity(user: &str, keyword: &str, layout: KeyboardLayout) -> ScoreFactor {
    let (u, k) = (chars(user), chars(keyword));
    let earned = if u.len() != k.len() || k.is_empty() {
        0.0
    } else {
        let hits: f64 = u
            .iter()
            .zip(&k)
            .map(|(&a, &b)| {
                if a == b {
                    1.0
                } else if are_adjacent(a, b, layout) {
                    0.5
                } else {
                    0.0
                }
            })
            .sum();
        hits / k.len() as f64 * KEYBOARD_WEIGHT
    };
    ScoreFactor::new("keyboard_proximity", KEYBOARD_WEIGHT, earned)
}

/// Fraction of positions that sound alike, only for words of equal length.
pub fn phonetic(user: &str, keyword: &str) -> ScoreFactor {
    let (u, k) = (chars(user), chars(keyword));
    let earned = if u.len() != k.len() || k.is_empty() {
        0.0
    } else {
        let hits = u
            .iter()
            .zip(&k)
            .filter(|&(&a, &b)| are_phonetically_similar(a, b))
            .count();
        hits as f64 / k.len() as f64 * PHONETIC_WEIGHT
    };
    ScoreFactor::new("phonetic", PHONETIC_WEIGHT, earned)
}

/// Full credit when collapsing repeats on both sides makes the words equal,
/// 8 points when collapsing just one side does.
pub fn repetition(user: &str, keyword: &str) -> ScoreFactor {
    let user_collapsed = collapse_repeats(user);
    let keyword_collapsed = collapse_repeats(keyword);
    let earned = if user_collapsed == keyword_collapsed {
        REPETITION_WEIGHT
    } else if user_collapsed == keyword || user == keyword_collapsed {
        8.0
    } else {
        0.0
    };
    ScoreFactor::new("repetition", REPETITION_WEIGHT, earned)
}
