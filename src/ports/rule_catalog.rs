//! Rule Catalog Port - which rule a flow state expects.
//!
//! The flow configuration layer declares validation rules per flow state.
//! Handlers look rules up here; a state with no entry accepts any input.

use thiserror::Error;

use crate::domain::validation::ValidationRule;

/// Port for looking up the validation rule of a flow state.
pub trait RuleCatalog: Send + Sync {
    /// Returns the rule for `flow_state`, if one is declared.
    fn rule_for(&self, flow_state: &str) -> Option<&ValidationRule>;

    /// Number of flow states with a declared rule.
    fn len(&self) -> usize;

    /// Returns true if no rules are declared.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors raised while loading a rule catalog.
#[derive(Debug, Error)]
pub enum RuleCatalogError {
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule document: {0}")]
    Parse(#[from] serde_yaml::Error),
}
