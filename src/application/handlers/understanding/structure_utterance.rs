//! StructureUtteranceHandler - Cache-checked entity structuring

use tracing::debug;

use crate::domain::entities::{EntityStructurer, RecognizedSpan, StructuredRecord};
use crate::ports::StructuredRecordCache;

/// Command to structure the spans recognized in one message
#[derive(Debug, Clone)]
pub struct StructureUtteranceCommand {
    /// Exact message text; used as the cache key.
    pub text: String,
    pub spans: Vec<RecognizedSpan>,
}

/// Result of structuring a message
#[derive(Debug, Clone, PartialEq)]
pub struct StructureUtteranceResult {
    pub record: StructuredRecord,
    pub cache_hit: bool,
}

/// Handler that memoizes structuring per message within a turn
#[derive(Debug, Clone, Default)]
pub struct StructureUtteranceHandler {
    structurer: EntityStructurer,
}

impl StructureUtteranceHandler {
    pub fn new() -> Self {
        Self {
            structurer: EntityStructurer::new(),
        }
    }

    /// Returns the cached record for the message text, or structures the
    /// spans and caches the result.
    pub fn handle(
        &self,
        cmd: StructureUtteranceCommand,
        cache: &mut dyn StructuredRecordCache,
    ) -> StructureUtteranceResult {
        if let Some(record) = cache.get(&cmd.text) {
            debug!(text = %cmd.text, "Structured record served from turn cache");
            return StructureUtteranceResult {
                record,
                cache_hit: true,
            };
        }

        let record = self.structurer.structure(&cmd.spans);
        debug!(
            text = %cmd.text,
            items = record.items.len(),
            confirmed = record.confirmed,
            "Structured message"
        );
        cache.set(&cmd.text, record.clone());

        StructureUtteranceResult {
            record,
            cache_hit: false,
        }
    }
}
