//! End-to-end checks of the public API on realistic chat typos.

use pretty_assertions::assert_eq;
use typomatch_core::{
    are_adjacent, collapse_repeats, damerau_levenshtein, is_match, is_match_with_threshold,
    levenshtein, score, KeyboardLayout, KeywordIndex, MatchConfig, TypoMatcher,
};

#[test]
fn distance_examples() {
    assert_eq!(levenshtein("teh", "the"), 2);
    assert_eq!(damerau_levenshtein("teh", "the"), 1);
    assert_eq!(levenshtein("hello", "hello"), 0);
}

#[test]
fn collapse_examples() {
    assert_eq!(collapse_repeats("heyy"), "hey");
    assert_eq!(collapse_repeats("thankss"), "thanks");
}

#[test]
fn adjacency_examples() {
    assert!(are_adjacent('q', 'w', KeyboardLayout::Qwerty));
    assert!(!are_adjacent('q', 'p', KeyboardLayout::Qwerty));
}

#[test]
fn fast_matcher_examples() {
    assert!(is_match("thanks", "thanks"));
    assert!(!is_match("thx", "thanks"));
    assert!(is_match_with_threshold("helo", "hello", 0.80));
    assert!(is_match("Hellp", "hello"));
}

#[test]
fn composite_examples() {
    assert_eq!(score("bonjour", "bonjour"), 1.0);
    assert_eq!(score("", "x"), 0.0);
    assert_eq!(score("x", ""), 0.0);
    assert!(score("bonjuor", "bonjour") > score("bonsoir", "bonjour"));
}

#[test]
fn classify_short_message() {
    let mut index = KeywordIndex::new();
    let (count, hash) =
        index.rebuild(["hello", "hi", "thank", "thanks", "merci", "goodbye", "bye"]);
    assert_eq!(count, 7);
    assert!(!hash.is_empty());

    let classify = |message: &str| {
        message
            .split_whitespace()
            .find_map(|word| index.first_match(word).map(str::to_string))
    };

    assert_eq!(classify("thankss"), Some("thanks".to_string()));
    // Both "thank" and "thanks" pass the fast matcher; the exact keyword wins.
    assert_eq!(classify("thanks"), Some("thanks".to_string()));
    assert_eq!(classify("Thank you"), Some("thank".to_string()));
    assert_eq!(classify("ok mercii"), Some("merci".to_string()));
    assert_eq!(classify("godbye"), Some("goodbye".to_string()));
    assert_eq!(classify("weather"), None);
}

#[test]
fn azerty_matcher_ranks_french_typos() {
    let config = MatchConfig::default()
        .with_layout(KeyboardLayout::Azerty)
        .with_min_score(0.5);
    let matcher = TypoMatcher::with_config(config.clone()).unwrap();
    let mut index = KeywordIndex::with_config(config).unwrap();
    index.rebuild(["salut", "merci", "coucou"]);

    // 'z' and 'q' are neighbors on AZERTY only.
    assert!(matcher.score("zuit", "quit") > TypoMatcher::new().score("zuit", "quit"));

    let ranked = index.rank("sqlut", None, None);
    assert_eq!(ranked[0].keyword, "salut");
}
