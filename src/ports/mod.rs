//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StructuredRecordCache` - Turn-scoped memo of structuring results
//! - `RuleCatalog` - Validation rules declared per flow state

mod rule_catalog;
mod structured_record_cache;

pub use rule_catalog::{RuleCatalog, RuleCatalogError};
pub use structured_record_cache::StructuredRecordCache;
