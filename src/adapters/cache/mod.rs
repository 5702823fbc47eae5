//! Cache Adapters - Implementations of StructuredRecordCache.

mod turn_scoped_cache;

pub use turn_scoped_cache::TurnScopedCache;
