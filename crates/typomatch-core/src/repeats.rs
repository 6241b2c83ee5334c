//! Repeated-letter normalization ("heyy" -> "hey")

/// Drop every character equal to the one kept just before it.
///
/// ```
/// use typomatch_core::repeats::collapse_repeats;
///
/// assert_eq!(collapse_repeats("thankss"), "thanks");
/// assert_eq!(collapse_repeats("heeeyyy"), "hey");
/// ```
pub fn collapse_repeats(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for c in s.chars() {
        if last != Some(c) {
            out.push(c);
            last = Some(c);
        }
    }
    out
}

/// True if any two consecutive characters are equal.
pub fn has_repeats(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(mut prev) = chars.next() else {
        return false;
    };
    for c in chars {
        if c == prev {
            return true;
        }
        prev = c;
    }
    false
}
