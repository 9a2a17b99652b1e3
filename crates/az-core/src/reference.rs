//! Configured references to monitored data points

use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// One entry of a configured reference list
///
/// Stored externally as `{"ID": 12345, "Use": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneReference {
    #[serde(rename = "ID")]
    pub id: ObjectId,
    #[serde(rename = "Use")]
    pub enabled: bool,
}

impl ZoneReference {
    pub fn new(id: impl Into<ObjectId>, enabled: bool) -> Self {
        Self {
            id: id.into(),
            enabled,
        }
    }

    /// A reference that is never in use, substituted for malformed records
    pub const fn unused() -> Self {
        Self {
            id: ObjectId::ROOT,
            enabled: false,
        }
    }

    /// Decode a single record, falling back to an unused reference
    pub fn from_record(record: &serde_json::Value) -> Self {
        serde_json::from_value(record.clone()).unwrap_or_else(|_| Self::unused())
    }
}

/// Decode a list of records, mapping each malformed record to an unused reference
pub fn decode_references(records: &[serde_json::Value]) -> Vec<ZoneReference> {
    records.iter().map(ZoneReference::from_record).collect()
}

/// Decode the serialized (JSON text) form of a reference list
///
/// Returns `None` if the text is not a JSON array at all.
pub fn decode_serialized_references(text: &str) -> Option<Vec<ZoneReference>> {
    if text.trim().is_empty() {
        return Some(Vec::new());
    }
    match serde_json::from_str::<serde_json::Value>(text).ok()? {
        serde_json::Value::Array(records) => Some(decode_references(&records)),
        _ => None,
    }
}
