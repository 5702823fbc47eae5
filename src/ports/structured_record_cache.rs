//! Structured Record Cache Port - per-turn memo of structuring results.
//!
//! The cache belongs to the caller, which opens one per conversation turn
//! and drops it when the turn ends. Keys are the exact input text; no
//! trimming or case folding is applied.

use crate::domain::entities::StructuredRecord;

/// Port for memoizing structured records within one turn.
///
/// # Contract
///
/// Implementations must:
/// - Return only records stored under the byte-identical key
/// - Never share entries across turns or conversations
pub trait StructuredRecordCache {
    /// Looks up the record previously stored for `text`.
    fn get(&self, text: &str) -> Option<StructuredRecord>;

    /// Stores the record for `text`, replacing any earlier entry.
    fn set(&mut self, text: &str, record: StructuredRecord);
}
