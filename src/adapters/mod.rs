//! Adapters - Implementations of ports.
//!
//! - `cache` - Turn-scoped structured record cache
//! - `rules` - YAML rule catalog for flow definitions
//! - `recognizer` - Recognizer response decoding

mod cache;
mod recognizer;
mod rules;

pub use cache::TurnScopedCache;
pub use recognizer::{DetectedIntent, PayloadError, RecognizedEntity, RecognizerPayload};
pub use rules::YamlRuleCatalog;
