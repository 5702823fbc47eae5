//! ValidateInputHandler - Gate a message against its flow state's rule

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::ContextSnapshot;
use crate::domain::validation::{ValidationEngine, ValidationVerdict};
use crate::ports::RuleCatalog;

/// Command to validate a message for a flow state
#[derive(Debug, Clone)]
pub struct ValidateInputCommand {
    pub flow_state: String,
    pub input: String,
    pub context: ContextSnapshot,
}

/// Result of validating a message
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateInputResult {
    pub flow_state: String,
    /// Strategy that produced the verdict; `None` when the state has no rule.
    pub strategy: Option<&'static str>,
    pub verdict: ValidationVerdict,
}

/// Handler that looks up a flow state's rule and validates input against it
pub struct ValidateInputHandler {
    catalog: Arc<dyn RuleCatalog>,
    engine: ValidationEngine,
}

impl ValidateInputHandler {
    pub fn new(catalog: Arc<dyn RuleCatalog>, engine: ValidationEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn handle(&self, cmd: ValidateInputCommand) -> ValidateInputResult {
        let rule = self.catalog.rule_for(&cmd.flow_state);
        if rule.is_none() {
            debug!(flow_state = %cmd.flow_state, "No rule declared for flow state");
        }

        let verdict = self.engine.gate(rule, &cmd.input, &cmd.context);
        debug!(
            flow_state = %cmd.flow_state,
            valid = verdict.valid,
            "Validated input"
        );

        ValidateInputResult {
            strategy: rule.map(|r| r.strategy()),
            flow_state: cmd.flow_state,
            verdict,
        }
    }
}
