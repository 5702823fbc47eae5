//! Entity structurer - pairs recognized spans into a structured record.

use tracing::debug;

use super::address::normalize_address_type;
use super::quantity::{parse_quantity, DEFAULT_QUANTITY};
use super::record::{QuantifiedItem, StructuredRecord};
use super::span::{RecognizedSpan, SpanLabel};

/// Turns an unordered bag of spans into a [`StructuredRecord`].
///
/// Spans are walked in order of their start offset (ties keep input order).
/// A quantity span is held until the next item span, which consumes it; an
/// item with nothing held gets quantity 1. A quantity still held when the
/// walk ends is applied to the last item, which covers recognizers that emit
/// "momos 4" as item-then-quantity.
///
/// Structuring is total: empty, overlapping, or out-of-order input never
/// fails, and identical input always yields an identical record.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityStructurer;

impl EntityStructurer {
    pub fn new() -> Self {
        Self
    }

    /// Structures the given spans.
    pub fn structure(&self, spans: &[RecognizedSpan]) -> StructuredRecord {
        let mut ordered: Vec<&RecognizedSpan> = spans.iter().collect();
        ordered.sort_by_key(|span| span.start);

        let mut record = StructuredRecord {
            raw_spans: spans.to_vec(),
            ..Default::default()
        };
        let mut pending_quantity: Option<u32> = None;

        for span in ordered {
            match span.label {
                SpanLabel::Quantity => {
                    pending_quantity = Some(parse_quantity(&span.text));
                }
                SpanLabel::FoodItem => {
                    let quantity = pending_quantity.take().unwrap_or(DEFAULT_QUANTITY);
                    record.items.push(QuantifiedItem::new(span.text.clone(), quantity));
                }
                SpanLabel::StoreReference => {
                    if record.store.is_none() {
                        record.store = Some(span.text.clone());
                    }
                }
                SpanLabel::Location => {
                    if record.location.is_none() {
                        record.location = Some(span.text.clone());
                    }
                }
                SpanLabel::AddressCategory => {
                    record.address_category = Some(normalize_address_type(&span.text));
                }
                SpanLabel::Action => {
                    record.action = Some(span.text.to_lowercase());
                }
                SpanLabel::ConfirmationMarker => {
                    record.confirmed = true;
                }
                SpanLabel::Preference => {
                    record.preferences.push(span.text.clone());
                }
                SpanLabel::Unknown => {
                    debug!(text = %span.text, start = span.start, "Skipping span with unknown label");
                }
            }
        }

        if let Some(quantity) = pending_quantity {
            if let Some(last) = record.items.last_mut() {
                debug!(item = %last.item, quantity, "Applying trailing quantity to last item");
                last.quantity = quantity;
            }
        }

        record
    }
}
