//! Keyboard adjacency model
//!
//! Hand-authored neighbor rows for QWERTY and AZERTY. The rows are not
//! guaranteed symmetric, so [`are_adjacent`] checks both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Physical keyboard layout used for adjacency lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Azerty,
}

impl KeyboardLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qwerty => "qwerty",
            Self::Azerty => "azerty",
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyboardLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qwerty" => Ok(Self::Qwerty),
            "azerty" => Ok(Self::Azerty),
            _ => Err(ConfigError::UnknownLayout(s.to_string())),
        }
    }
}

fn qwerty_row(c: char) -> &'static str {
    match c {
        'a' => "qwszx",
        'b' => "vghn",
        'c' => "xdfv",
        'd' => "erfcxs",
        'e' => "wrdsf",
        'f' => "rtgvcd",
        'g' => "tyhbvf",
        'h' => "yujnbg",
        'i' => "uojkl",
        'j' => "uikmnh",
        'k' => "iolmj",
        'l' => "opkm",
        'm' => "njkl",
        'n' => "bhjm",
        'o' => "iplk",
        'p' => "ol",
        'q' => "wa",
        'r' => "etdf",
        's' => "wedxza",
        't' => "ryfg",
        'u' => "yihj",
        'v' => "cfgb",
        'w' => "qeas",
        'x' => "zsdc",
        'y' => "tugh",
        'z' => "asx",
        _ => "",
    }
}

fn azerty_row(c: char) -> &'static str {
    match c {
        'a' => "qzse",
        'b' => "vghn",
        'c' => "xdfv",
        'd' => "erfcs",
        'e' => "zsdr",
        'f' => "rtgvcd",
        'g' => "tyhbvf",
        'h' => "yujnbg",
        'i' => "uojk",
        'j' => "uikmnh",
        'k' => "iolmj",
        'l' => "opm",
        'm' => "njkl",
        'n' => "bhjm",
        'o' => "iplk",
        'p' => "ol",
        'q' => "azw",
        'r' => "etdf",
        's' => "edxzqa",
        't' => "ryfg",
        'u' => "yihj",
        'v' => "cfgb",
        'w' => "qxs",
        'x' => "wsdc",
        'y' => "tugh",
        'z' => "aeqs",
        _ => "",
    }
}

/// Neighbor keys of `c` on `layout`. Empty for anything outside `a..=z`.
pub fn neighbors(c: char, layout: KeyboardLayout) -> &'static str {
    match layout {
        KeyboardLayout::Qwerty => qwerty_row(c),
        KeyboardLayout::Azerty => azerty_row(c),
    }
}

/// True if `c1 == c2` or either key lists the other as a neighbor.
#[inline]
pub fn are_adjacent(c1: char, c2: char, layout: KeyboardLayout) -> bool {
    c1 == c2 || neighbors(c1, layout).contains(c2) || neighbors(c2, layout).contains(c1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qwerty_adjacency() {
        assert!(are_adjacent('q', 'w', KeyboardLayout::Qwerty));
        assert!(are_adjacent('w', 'q', KeyboardLayout::Qwerty));
        assert!(!are_adjacent('q', 'p', KeyboardLayout::Qwerty));
        assert!(are_adjacent('g', 'g', KeyboardLayout::Qwerty));
    }

    #[test]
    fn test_asymmetric_rows_checked_both_ways() {
        // 'a' lists 'x' but 'x' does not list 'a'.
        assert!(!neighbors('x', KeyboardLayout::Qwerty).contains('a'));
        assert!(are_adjacent('x', 'a', KeyboardLayout::Qwerty));
    }

    #[test]
    fn test_azerty_differs_from_qwerty() {
        assert!(are_adjacent('a', 'z', KeyboardLayout::Azerty));
        assert!(are_adjacent('q', 'w', KeyboardLayout::Azerty));
        assert!(!are_adjacent('w', 'e', KeyboardLayout::Azerty));
        assert!(are_adjacent('w', 'e', KeyboardLayout::Qwerty));
    }

    #[test]
    fn test_unknown_chars_only_match_themselves() {
        assert_eq!(neighbors('7', KeyboardLayout::Qwerty), "");
        assert!(!are_adjacent('é', 'e', KeyboardLayout::Qwerty));
        assert!(!are_adjacent('1', '2', KeyboardLayout::Azerty));
        assert!(are_adjacent('!', '!', KeyboardLayout::Azerty));
        // Tables are lowercase only.
        assert!(!are_adjacent('Q', 'w', KeyboardLayout::Qwerty));
    }

    #[test]
    fn test_every_letter_has_a_row() {
        for c in 'a'..='z' {
            assert!(!neighbors(c, KeyboardLayout::Qwerty).is_empty(), "qwerty {c}");
            assert!(!neighbors(c, KeyboardLayout::Azerty).is_empty(), "azerty {c}");
        }
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("QWERTY".parse::<KeyboardLayout>(), Ok(KeyboardLayout::Qwerty));
        assert_eq!(" azerty ".parse::<KeyboardLayout>(), Ok(KeyboardLayout::Azerty));
        assert_eq!(
            "dvorak".parse::<KeyboardLayout>(),
            Err(ConfigError::UnknownLayout("dvorak".to_string()))
        );
        assert_eq!(KeyboardLayout::Azerty.to_string(), "azerty");
    }
}
