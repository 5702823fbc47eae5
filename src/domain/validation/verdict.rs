//! Validation verdict - the uniform result of every strategy.

use serde::{Deserialize, Serialize};

/// Pass/fail outcome of validating one input against one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    /// Trimmed, lowercased input the strategy looked at.
    pub normalized_input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Matched keyword, selected option, or "yes"/"no".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_prompt: Option<String>,
}

impl ValidationVerdict {
    /// A passing verdict with nothing extracted.
    pub fn pass(normalized_input: impl Into<String>) -> Self {
        Self {
            valid: true,
            normalized_input: normalized_input.into(),
            failure_reason: None,
            extracted_value: None,
            recovery_prompt: None,
        }
    }

    /// A passing verdict carrying an extracted value.
    pub fn pass_with(normalized_input: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            extracted_value: Some(value.into()),
            ..Self::pass(normalized_input)
        }
    }

    /// A failing verdict with a reason and a recovery prompt.
    pub fn fail(
        normalized_input: impl Into<String>,
        reason: impl Into<String>,
        recovery_prompt: impl Into<String>,
    ) -> Self {
        Self {
            valid: false,
            normalized_input: normalized_input.into(),
            failure_reason: Some(reason.into()),
            extracted_value: None,
            recovery_prompt: Some(recovery_prompt.into()),
        }
    }
}
