//! Validation engine configuration

use serde::Deserialize;

use crate::domain::validation::{RecoveryPrompts, ValidationEngine, DEFAULT_INTENT_PATH};

use super::error::ValidationError;

/// Validation engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Context path of the detected intent
    #[serde(default = "default_intent_path")]
    pub intent_path: String,

    /// Default recovery prompts per strategy
    #[serde(default)]
    pub prompts: RecoveryPrompts,
}

fn default_intent_path() -> String {
    DEFAULT_INTENT_PATH.to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            intent_path: default_intent_path(),
            prompts: RecoveryPrompts::default(),
        }
    }
}

impl ValidationConfig {
    /// Build an engine from this configuration
    pub fn engine(&self) -> ValidationEngine {
        ValidationEngine::new()
            .with_intent_path(self.intent_path.clone())
            .with_prompts(self.prompts.clone())
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.intent_path.trim().is_empty() {
            return Err(ValidationError::EmptyIntentPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ContextSnapshot;
    use crate::domain::validation::ValidationRule;
    use serde_json::json;

    #[test]
    fn defaults_read_intent_from_nlu() {
        let config = ValidationConfig::default();
        assert_eq!(config.intent_path, "nlu.intent");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_intent_path_is_rejected() {
        let config = ValidationConfig {
            intent_path: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyIntentPath));
    }

    #[test]
    fn engine_uses_configured_path_and_prompts() {
        let config: ValidationConfig = serde_json::from_value(json!({
            "intent_path": "intent.name",
            "prompts": {"confirmation": "Haan ya nahi?"}
        }))
        .unwrap();
        let engine = config.engine();

        let ctx = ContextSnapshot::from_value(json!({"intent": {"name": "greet"}})).unwrap();
        let gate = ValidationRule::IntentGate {
            allowed_intents: vec!["greet".into()],
            denied_intents: vec![],
            intent_path: None,
            retry_prompt: None,
        };
        assert!(engine.validate(&gate, "hi", &ctx).valid);

        let confirm = ValidationRule::Confirmation { retry_prompt: None };
        let verdict = engine.validate(&confirm, "hmm", &ctx);
        assert_eq!(verdict.recovery_prompt.as_deref(), Some("Haan ya nahi?"));
    }
}
