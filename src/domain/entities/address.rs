//! Address category normalization.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of a delivery address.
///
/// The set is open: synonyms of home and office collapse onto the two
/// known variants, anything else is kept as its lowercased token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressCategory {
    Home,
    Office,
    Other(String),
}

impl AddressCategory {
    /// Returns the category as it is written to records.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for AddressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AddressCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AddressCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize_address_type(&raw))
    }
}

static ADDRESS_SYNONYMS: Lazy<HashMap<&'static str, AddressCategory>> = Lazy::new(|| {
    let home = [
        "home", "house", "ghar", "gharpe", "makaan", "makan", "flat", "residence", "घर", "मकान",
    ];
    let office = [
        "office", "ofis", "daftar", "dafter", "work", "workplace", "karyalay", "दफ्तर", "ऑफिस",
        "कार्यालय",
    ];

    home.iter()
        .map(|word| (*word, AddressCategory::Home))
        .chain(office.iter().map(|word| (*word, AddressCategory::Office)))
        .collect()
});

/// Maps a locale-specific address word onto its category.
///
/// Lookup is case-insensitive on the trimmed token; unmapped tokens pass
/// through lowercased.
pub fn normalize_address_type(token: &str) -> AddressCategory {
    let lowered = token.trim().to_lowercase();
    match ADDRESS_SYNONYMS.get(lowered.as_str()) {
        Some(category) => category.clone(),
        None => AddressCategory::Other(lowered),
    }
}
