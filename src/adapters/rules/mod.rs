//! Rule Adapters - Flow-definition rule loading.

mod yaml_rule_catalog;

pub use yaml_rule_catalog::YamlRuleCatalog;
