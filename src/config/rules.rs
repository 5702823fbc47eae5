//! Rule catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where flow-state validation rules are loaded from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Path to a YAML rule catalog; no catalog means every state passes
    pub path: Option<PathBuf>,
}

impl RulesConfig {
    /// Validate rule catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptyRulesPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_path_is_rejected() {
        let config = RulesConfig {
            path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyRulesPath));
    }
}
