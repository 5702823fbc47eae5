//! Recognizer Adapters - Decoding of the external recognizer's responses.

mod payload;

pub use payload::{DetectedIntent, PayloadError, RecognizedEntity, RecognizerPayload};
