//! Bilingual yes/no vocabulary for confirmation questions.

use serde::{Deserialize, Serialize};

/// Canonical answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// Static yes/no word lists.
#[derive(Debug)]
pub struct ConfirmationLexicon {
    yes: &'static [&'static str],
    no: &'static [&'static str],
}

/// English, romanized Hindi, and Devanagari answers.
pub static BILINGUAL_LEXICON: ConfirmationLexicon = ConfirmationLexicon {
    yes: &[
        "yes", "yeah", "yep", "yup", "sure", "okay", "ok", "haan", "haa", "han", "bilkul",
        "theek", "thik", "chalega", "confirm", "correct", "हाँ", "हां", "ठीक", "बिल्कुल",
    ],
    no: &[
        "no", "nope", "nah", "nahi", "nahin", "mat", "cancel", "galat", "wrong", "incorrect",
        "नहीं", "ना", "मत",
    ],
};

impl ConfirmationLexicon {
    /// Returns the process-wide bilingual lexicon.
    pub fn bilingual() -> &'static Self {
        &BILINGUAL_LEXICON
    }

    /// Classifies already-normalized input.
    ///
    /// Lexicon words match whole words of the input only, so "thanks" does
    /// not hold "han" and "खाना" does not hold "ना". The yes list is
    /// consulted before the no list, so input holding words from both reads
    /// as yes.
    pub fn classify(&self, normalized: &str) -> Option<Confirmation> {
        let tokens: Vec<&str> = words(normalized).collect();
        if tokens.is_empty() {
            return None;
        }
        if self.yes.iter().any(|entry| tokens.contains(entry)) {
            return Some(Confirmation::Yes);
        }
        if self.no.iter().any(|entry| tokens.contains(entry)) {
            return Some(Confirmation::No);
        }
        None
    }
}

/// Splits on whitespace, ASCII punctuation, and the Devanagari danda.
fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।' || c == '॥')
        .filter(|word| !word.is_empty())
}
