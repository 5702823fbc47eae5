//! Recognized spans - labeled regions of the input text.

use serde::{Deserialize, Serialize};

/// Category assigned to a span by the external recognizer.
///
/// Labels outside the known tag set decode to [`SpanLabel::Unknown`]; the
/// structurer skips them but they survive in `raw_spans`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanLabel {
    #[serde(alias = "qty")]
    Quantity,

    #[serde(alias = "food-item", alias = "item")]
    FoodItem,

    #[serde(alias = "store-reference", alias = "store")]
    StoreReference,

    Location,

    #[serde(alias = "address-category", alias = "address_type")]
    AddressCategory,

    Action,

    #[serde(alias = "confirmation-marker", alias = "confirm")]
    ConfirmationMarker,

    Preference,

    #[serde(other)]
    Unknown,
}

impl SpanLabel {
    /// Returns true for labels the structurer acts on.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// One labeled region of the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedSpan {
    /// Surface form as it appeared in the text.
    pub text: String,
    pub label: SpanLabel,
    /// Char offset of the first character.
    pub start: usize,
    /// Char offset one past the last character.
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RecognizedSpan {
    /// Creates a span without a confidence score.
    pub fn new(label: SpanLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
            confidence: None,
        }
    }

    /// Attaches a recognizer confidence score.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Checks `0 <= start < end <= source_len`.
    pub fn is_within(&self, source_len: usize) -> bool {
        self.start < self.end && self.end <= source_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_accept_kebab_and_short_aliases() {
        let cases = [
            ("\"food_item\"", SpanLabel::FoodItem),
            ("\"food-item\"", SpanLabel::FoodItem),
            ("\"item\"", SpanLabel::FoodItem),
            ("\"store\"", SpanLabel::StoreReference),
            ("\"address_type\"", SpanLabel::AddressCategory),
            ("\"confirmation-marker\"", SpanLabel::ConfirmationMarker),
            ("\"qty\"", SpanLabel::Quantity),
        ];
        for (json, expected) in cases {
            let label: SpanLabel = serde_json::from_str(json).unwrap();
            assert_eq!(label, expected, "decoding {}", json);
        }
    }

    #[test]
    fn unrecognized_label_decodes_to_unknown() {
        let label: SpanLabel = serde_json::from_str("\"payment_mode\"").unwrap();
        assert_eq!(label, SpanLabel::Unknown);
        assert!(!label.is_known());
    }

    #[test]
    fn serializes_canonical_snake_case() {
        let json = serde_json::to_string(&SpanLabel::StoreReference).unwrap();
        assert_eq!(json, "\"store_reference\"");
    }

    #[test]
    fn bounds_check_rejects_empty_and_overflowing_spans() {
        assert!(RecognizedSpan::new(SpanLabel::FoodItem, "vada", 0, 4).is_within(4));
        assert!(!RecognizedSpan::new(SpanLabel::FoodItem, "", 3, 3).is_within(10));
        assert!(!RecognizedSpan::new(SpanLabel::FoodItem, "vada", 2, 6).is_within(5));
    }

    #[test]
    fn confidence_is_omitted_when_absent() {
        let span = RecognizedSpan::new(SpanLabel::Quantity, "2", 0, 1);
        let json = serde_json::to_value(&span).unwrap();
        assert!(json.get("confidence").is_none());

        let scored = span.with_confidence(0.5);
        assert_eq!(scored.confidence, Some(0.5));
    }
}
