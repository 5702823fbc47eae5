//! Entity structuring module.
//!
//! Converts the labeled spans produced by an external recognizer into a
//! normalized [`StructuredRecord`]: quantified items, store, location,
//! address category, action, confirmation flag, and preferences.

mod address;
mod quantity;
mod record;
mod span;
mod structurer;

pub use address::{normalize_address_type, AddressCategory};
pub use quantity::{parse_quantity, DEFAULT_QUANTITY};
pub use record::{QuantifiedItem, StructuredRecord};
pub use span::{RecognizedSpan, SpanLabel};
pub use structurer::EntityStructurer;
