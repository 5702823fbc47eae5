//! YAML Rule Catalog - Implementation of RuleCatalog.
//!
//! Loads the validation rules of a flow definition from a YAML document:
//!
//! ```yaml
//! rules:
//!   ask_size:
//!     type: selection
//!     options: [Small, Medium, Large]
//!   confirm_order:
//!     type: confirmation
//! ```
//!
//! Rules are linted at load time and every defect is logged, but defective
//! rules are still loaded; at validation time they fail open.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::validation::ValidationRule;
use crate::ports::{RuleCatalog, RuleCatalogError};

#[derive(Debug, Deserialize)]
struct RuleDocument {
    #[serde(default)]
    rules: BTreeMap<String, ValidationRule>,
}

/// Rule catalog backed by a YAML flow definition.
#[derive(Debug, Clone, Default)]
pub struct YamlRuleCatalog {
    rules: BTreeMap<String, ValidationRule>,
}

impl YamlRuleCatalog {
    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleCatalogError> {
        let document: RuleDocument = serde_yaml::from_str(yaml)?;
        let catalog = Self {
            rules: document.rules,
        };
        catalog.report_defects();
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleCatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| RuleCatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), rules = catalog.rules.len(), "Loaded validation rules");
        Ok(catalog)
    }

    /// Flow states that declare a rule, in sorted order.
    pub fn flow_states(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    fn report_defects(&self) {
        for (state, rule) in &self.rules {
            for defect in rule.lint() {
                warn!(flow_state = %state, strategy = rule.strategy(), "Rule defect: {}", defect);
            }
        }
    }
}

impl RuleCatalog for YamlRuleCatalog {
    fn rule_for(&self, flow_state: &str) -> Option<&ValidationRule> {
        self.rules.get(flow_state)
    }

    fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FLOW: &str = r#"
rules:
  ask_size:
    type: selection
    options: [Small, Medium, Large]
  ask_pincode:
    type: pattern
    pattern: '\b\d{6}\b'
    retry_prompt: "Please share your 6 digit pincode"
  confirm_order:
    type: confirmation
  broken:
    type: pattern
    pattern: "([unclosed"
"#;

    #[test]
    fn loads_rules_by_flow_state() {
        let catalog = YamlRuleCatalog::from_yaml_str(FLOW).unwrap();

        assert_eq!(catalog.len(), 4);
        assert!(matches!(
            catalog.rule_for("ask_size"),
            Some(ValidationRule::Selection { options, .. }) if options.len() == 3
        ));
        assert_eq!(
            catalog.rule_for("ask_pincode").and_then(|r| r.retry_prompt()),
            Some("Please share your 6 digit pincode")
        );
    }

    #[test]
    fn defective_rules_are_still_loaded() {
        let catalog = YamlRuleCatalog::from_yaml_str(FLOW).unwrap();
        let broken = catalog.rule_for("broken").unwrap();
        assert!(!broken.lint().is_empty());
    }

    #[test]
    fn unknown_state_has_no_rule() {
        let catalog = YamlRuleCatalog::from_yaml_str(FLOW).unwrap();
        assert!(catalog.rule_for("ask_address").is_none());
    }

    #[test]
    fn flow_states_are_sorted() {
        let catalog = YamlRuleCatalog::from_yaml_str(FLOW).unwrap();
        let states: Vec<&str> = catalog.flow_states().collect();
        assert_eq!(states, vec!["ask_pincode", "ask_size", "broken", "confirm_order"]);
    }

    #[test]
    fn empty_document_gives_empty_catalog() {
        let catalog = YamlRuleCatalog::from_yaml_str("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn unknown_rule_type_is_a_load_error() {
        let result = YamlRuleCatalog::from_yaml_str("rules:\n  s:\n    type: fuzzy\n");
        assert!(matches!(result, Err(RuleCatalogError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FLOW.as_bytes()).unwrap();

        let catalog = YamlRuleCatalog::from_path(file.path()).unwrap();
        assert!(catalog.rule_for("confirm_order").is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = YamlRuleCatalog::from_path(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(RuleCatalogError::Io { .. })));
    }
}
