//! Recognizer payload decoding.
//!
//! The external recognizer answers each message with its detected intent
//! and labeled entities. This adapter turns that response into the spans
//! the structurer consumes and the context snapshot the validator reads.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::{RecognizedSpan, SpanLabel};
use crate::domain::foundation::ContextSnapshot;

/// Errors raised while decoding a recognizer response.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed recognizer response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Intent detected by the recognizer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedIntent {
    pub name: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

/// One entity as the recognizer reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecognizedEntity {
    #[serde(rename = "entity")]
    pub label: SpanLabel,
    #[serde(rename = "value")]
    pub text: String,
    pub start: usize,
    pub end: usize,
    #[serde(default, alias = "confidence_entity")]
    pub confidence: Option<f32>,
}

/// Decoded recognizer response for one message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecognizerPayload {
    pub text: String,
    #[serde(default)]
    pub intent: Option<DetectedIntent>,
    #[serde(default)]
    pub entities: Vec<RecognizedEntity>,
}

impl RecognizerPayload {
    /// Decodes a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Converts entities into spans, dropping any whose offsets fall
    /// outside the message text.
    ///
    /// Offsets are counted in chars, so Devanagari text is measured the
    /// same way the recognizer tokenizes it.
    pub fn spans(&self) -> Vec<RecognizedSpan> {
        let text_len = self.text.chars().count();

        self.entities
            .iter()
            .filter_map(|entity| {
                let mut span =
                    RecognizedSpan::new(entity.label, entity.text.clone(), entity.start, entity.end);
                if let Some(confidence) = entity.confidence {
                    span = span.with_confidence(confidence);
                }
                if !span.label.is_known() {
                    debug!(entity = %entity.text, "Keeping entity with unrecognized label");
                }
                if span.is_within(text_len) {
                    Some(span)
                } else {
                    warn!(
                        entity = %entity.text,
                        start = entity.start,
                        end = entity.end,
                        text_len,
                        "Dropping entity with out-of-range offsets"
                    );
                    None
                }
            })
            .collect()
    }

    /// Builds the context snapshot intent gates read from.
    ///
    /// The intent lands at `nlu.intent`; with no detected intent the
    /// snapshot has an empty `nlu` object.
    pub fn intent_context(&self) -> ContextSnapshot {
        let nlu = match &self.intent {
            Some(intent) => json!({
                "intent": intent.name,
                "intent_confidence": intent.confidence,
            }),
            None => json!({}),
        };
        ContextSnapshot::from_value(json!({ "nlu": nlu })).unwrap_or_default()
    }
}
