//! Phonetic similarity model
//!
//! A fixed, ordered list of symbol groups that tend to sound alike. Groups
//! may overlap and some symbols are two letters long ("ph", "ou"). Matching
//! compares single characters, so a two-letter symbol never matches one.

/// Groups of interchangeable symbols, in lookup order.
pub const PHONETIC_GROUPS: &[&[&str]] = &[
    &["c", "k", "s"],
    &["f", "ph"],
    &["i", "y"],
    &["u", "ou", "w"],
    &["s", "z"],
    &["g", "j"],
    &["c", "q", "k"],
];

fn group_contains(group: &[&str], c: char) -> bool {
    let mut buf = [0u8; 4];
    let symbol: &str = c.encode_utf8(&mut buf);
    group.contains(&symbol)
}

/// True if `c1 == c2` or some group contains both characters.
pub fn are_phonetically_similar(c1: char, c2: char) -> bool {
    if c1 == c2 {
        return true;
    }
    PHONETIC_GROUPS
        .iter()
        .any(|group| group_contains(group, c1) && group_contains(group, c2))
}
