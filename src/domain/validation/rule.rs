//! Validation rules - one tagged variant per strategy.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A declarative constraint the current flow state places on user input.
///
/// Each variant carries only the fields its strategy reads. Rules are
/// normally decoded from flow configuration, tagged by `type`:
///
/// ```yaml
/// type: selection
/// options: [Small, Medium, Large]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Case-insensitive regular expression that must match somewhere.
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_prompt: Option<String>,
    },

    /// Allow/deny lists checked against the detected intent.
    IntentGate {
        #[serde(default)]
        allowed_intents: Vec<String>,
        #[serde(default)]
        denied_intents: Vec<String>,
        /// Where the detected intent lives in the context snapshot.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intent_path: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_prompt: Option<String>,
    },

    /// At least one keyword must appear in the input.
    Keyword {
        keywords: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_prompt: Option<String>,
    },

    /// Input must pick one of the listed options.
    Selection {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_prompt: Option<String>,
    },

    /// Input must read as a yes or a no.
    Confirmation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retry_prompt: Option<String>,
    },

    /// Extension point for externally registered checks.
    Custom { hook: String },
}

impl ValidationRule {
    /// Strategy name, as written in the `type` tag.
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Pattern { .. } => "pattern",
            Self::IntentGate { .. } => "intent_gate",
            Self::Keyword { .. } => "keyword",
            Self::Selection { .. } => "selection",
            Self::Confirmation { .. } => "confirmation",
            Self::Custom { .. } => "custom",
        }
    }

    /// The rule's own recovery prompt, if it declares one.
    pub fn retry_prompt(&self) -> Option<&str> {
        match self {
            Self::Pattern { retry_prompt, .. }
            | Self::IntentGate { retry_prompt, .. }
            | Self::Keyword { retry_prompt, .. }
            | Self::Selection { retry_prompt, .. }
            | Self::Confirmation { retry_prompt } => retry_prompt.as_deref(),
            Self::Custom { .. } => None,
        }
    }

    /// Inspects the rule for configuration defects.
    ///
    /// Validation itself stays fail-open whatever this returns; the result
    /// is for reporting at flow-definition load time.
    pub fn lint(&self) -> Vec<RuleDefect> {
        let mut defects = Vec::new();

        match self {
            Self::Pattern { pattern, .. } => {
                if let Err(e) = RegexBuilder::new(pattern).case_insensitive(true).build() {
                    defects.push(RuleDefect::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    });
                }
            }
            Self::IntentGate {
                allowed_intents,
                denied_intents,
                intent_path,
                ..
            } => {
                for intent in allowed_intents {
                    if denied_intents.iter().any(|d| d.eq_ignore_ascii_case(intent)) {
                        defects.push(RuleDefect::ConflictingIntent {
                            intent: intent.clone(),
                        });
                    }
                }
                if intent_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
                    defects.push(RuleDefect::EmptyIntentPath);
                }
            }
            Self::Keyword { keywords, .. } => {
                if keywords.iter().all(|k| k.trim().is_empty()) {
                    defects.push(RuleDefect::NoKeywords);
                }
            }
            Self::Selection { options, .. } => {
                if options.is_empty() {
                    defects.push(RuleDefect::NoOptions);
                }
            }
            Self::Confirmation { .. } => {}
            Self::Custom { hook } => {
                if hook.trim().is_empty() {
                    defects.push(RuleDefect::UnnamedHook);
                }
            }
        }

        defects
    }
}

/// A configuration problem found by [`ValidationRule::lint`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleDefect {
    #[error("Pattern '{pattern}' does not compile: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Intent '{intent}' is both allowed and denied")]
    ConflictingIntent { intent: String },

    #[error("Intent path is empty")]
    EmptyIntentPath,

    #[error("Keyword rule has no keywords")]
    NoKeywords,

    #[error("Selection rule has no options")]
    NoOptions,

    #[error("Custom rule does not name a hook")]
    UnnamedHook,
}
