//! Default recovery prompts, one per failing strategy.

use serde::Deserialize;

/// Prompts shown to the user when a rule without its own `retry_prompt`
/// rejects their input.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RecoveryPrompts {
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(default = "default_intent")]
    pub intent: String,

    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Followed by the numbered option list.
    #[serde(default = "default_selection")]
    pub selection: String,

    #[serde(default = "default_confirmation")]
    pub confirmation: String,
}

fn default_pattern() -> String {
    "That doesn't look right. Could you try again?".to_string()
}

fn default_intent() -> String {
    "Sorry, I can't help with that here. Could you rephrase?".to_string()
}

fn default_keyword() -> String {
    "I didn't catch that. Could you say it another way?".to_string()
}

fn default_selection() -> String {
    "Please pick one of these:".to_string()
}

fn default_confirmation() -> String {
    "Please reply with yes or no (haan / nahi).".to_string()
}

impl Default for RecoveryPrompts {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            intent: default_intent(),
            keyword: default_keyword(),
            selection: default_selection(),
            confirmation: default_confirmation(),
        }
    }
}

impl RecoveryPrompts {
    /// Appends the options, numbered from 1, to a lead line.
    pub fn with_numbered_options(lead: &str, options: &[String]) -> String {
        let mut prompt = lead.to_string();
        for (index, option) in options.iter().enumerate() {
            prompt.push_str(&format!("\n{}. {}", index + 1, option));
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let prompts: RecoveryPrompts =
            serde_json::from_str(r#"{"confirmation": "Haan ya nahi?"}"#).unwrap();
        assert_eq!(prompts.confirmation, "Haan ya nahi?");
        assert_eq!(prompts.selection, RecoveryPrompts::default().selection);
    }

    #[test]
    fn numbers_options_from_one() {
        let text = RecoveryPrompts::with_numbered_options("Pick:", &["Small".into(), "Large".into()]);
        assert_eq!(text, "Pick:\n1. Small\n2. Large");
    }
}
