//! Input validation module.
//!
//! Decides whether a message satisfies the constraint the current flow
//! state expects, using one of six strategies selected by the rule's tag:
//! pattern, intent gate, keyword, selection, confirmation, and custom.

mod engine;
mod lexicon;
mod prompts;
mod rule;
mod verdict;

pub use engine::{normalize_input, ValidationEngine, DEFAULT_INTENT_PATH};
pub use lexicon::{Confirmation, ConfirmationLexicon, BILINGUAL_LEXICON};
pub use prompts::RecoveryPrompts;
pub use rule::{RuleDefect, ValidationRule};
pub use verdict::ValidationVerdict;
