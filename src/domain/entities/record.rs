//! Structured record - the normalized output of entity structuring.

use serde::{Deserialize, Serialize};

use super::address::AddressCategory;
use super::span::RecognizedSpan;

/// An item paired with how many of it were asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantifiedItem {
    pub item: String,
    pub quantity: u32,
}

impl QuantifiedItem {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// Domain facts extracted from one utterance.
///
/// Field merge policies when a label repeats:
/// - `store`, `location`: first span wins
/// - `address_category`, `action`: last span wins
/// - `confirmed`: set once, never cleared
/// - `items`, `preferences`: appended in span order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub items: Vec<QuantifiedItem>,
    pub store: Option<String>,
    pub location: Option<String>,
    pub address_category: Option<AddressCategory>,
    pub action: Option<String>,
    pub confirmed: bool,
    pub preferences: Vec<String>,
    /// Spans exactly as received, before sorting.
    pub raw_spans: Vec<RecognizedSpan>,
}

impl StructuredRecord {
    /// Returns true if no field carries extracted information.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.store.is_none()
            && self.location.is_none()
            && self.address_category.is_none()
            && self.action.is_none()
            && !self.confirmed
            && self.preferences.is_empty()
    }

    /// Total number of units across all items.
    ///
    /// Summed as `u64` since each item may carry up to `u32::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
