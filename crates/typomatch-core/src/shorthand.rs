//! Chat shorthand expansions ("u" -> "you")

const SHORTHAND: &[(&str, &str)] = &[
    ("u", "you"),
    ("r", "are"),
    ("2", "to"),
    ("4", "for"),
    ("b", "be"),
    ("c", "see"),
];

/// Full word for a shorthand token, if it is one. Case and surrounding
/// whitespace are ignored.
pub fn expand_shorthand(token: &str) -> Option<&'static str> {
    let token = token.trim();
    SHORTHAND
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(token))
        .map(|(_, full)| *full)
}
