//! Quantity parsing for English, romanized Hindi, and Devanagari numerals.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Quantity used when a token carries no recognizable number.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Number words for 1 through 12, keyed by lowercase surface form.
static NUMBER_WORDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let table: [(u32, &[&str]); 12] = [
        (1, &["one", "ek", "एक"]),
        (2, &["two", "do", "दो"]),
        (3, &["three", "teen", "तीन"]),
        (4, &["four", "char", "chaar", "चार"]),
        (5, &["five", "paanch", "panch", "पांच", "पाँच"]),
        (6, &["six", "chhe", "chhah", "che", "छह", "छः"]),
        (7, &["seven", "saat", "सात"]),
        (8, &["eight", "aath", "आठ"]),
        (9, &["nine", "nau", "नौ"]),
        (10, &["ten", "das", "दस"]),
        (11, &["eleven", "gyarah", "ग्यारह"]),
        (12, &["twelve", "dozen", "barah", "baarah", "बारह"]),
    ];

    table
        .iter()
        .flat_map(|(value, words)| words.iter().map(move |word| (*word, *value)))
        .collect()
});

/// Maps a token to a positive quantity.
///
/// Tries the number-word table (case-insensitive), then a base-10 parse of
/// the trimmed token. Anything else, including zero and negative numbers,
/// yields [`DEFAULT_QUANTITY`].
pub fn parse_quantity(token: &str) -> u32 {
    let trimmed = token.trim();
    let lowered = trimmed.to_lowercase();

    if let Some(value) = NUMBER_WORDS.get(lowered.as_str()) {
        return *value;
    }

    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => DEFAULT_QUANTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn romanized_and_devanagari_words_agree() {
        assert_eq!(parse_quantity("teen"), 3);
        assert_eq!(parse_quantity("तीन"), 3);
        assert_eq!(parse_quantity("three"), 3);
    }

    #[test]
    fn covers_one_through_twelve() {
        let words = [
            "ek", "do", "teen", "char", "paanch", "chhe", "saat", "aath", "nau", "das", "gyarah",
            "barah",
        ];
        for (index, word) in words.iter().enumerate() {
            assert_eq!(parse_quantity(word), index as u32 + 1, "word {}", word);
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_quantity("  Do "), 2);
        assert_eq!(parse_quantity("DOZEN"), 12);
    }

    #[test]
    fn parses_arabic_numerals() {
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity(" 25 "), 25);
    }

    #[test]
    fn unparseable_tokens_default_to_one() {
        assert_eq!(parse_quantity("plate"), DEFAULT_QUANTITY);
        assert_eq!(parse_quantity(""), DEFAULT_QUANTITY);
        assert_eq!(parse_quantity("2.5"), DEFAULT_QUANTITY);
    }

    #[test]
    fn zero_and_negative_default_to_one() {
        assert_eq!(parse_quantity("0"), DEFAULT_QUANTITY);
        assert_eq!(parse_quantity("-3"), DEFAULT_QUANTITY);
    }

    proptest! {
        #[test]
        fn never_returns_zero(token in "\\PC{0,12}") {
            prop_assert!(parse_quantity(&token) >= 1);
        }

        #[test]
        fn positive_integers_round_trip(n in 1u32..100_000) {
            prop_assert_eq!(parse_quantity(&n.to_string()), n);
        }
    }
}
