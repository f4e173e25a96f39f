//! Listing records: the raw oracle output, the normalized vehicle and
//! diagram records, and the per-listing bundle that travels through the
//! pipeline.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::value::FieldValue;

/// Correlation ID for one listing.
///
/// The vehicle record, diagram record, and source URL all travel under
/// the same ID, so no stage ever relies on list-index alignment between
/// parallel collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(Uuid);

impl ListingId {
    /// Generate a fresh ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The untyped field map returned by the extraction oracle.
///
/// Values are whatever the oracle produced: strings, numbers, or nulls.
/// Missing keys and nulls are expected and treated as "no value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExtraction(pub IndexMap<String, serde_json::Value>);

impl RawExtraction {
    /// An empty extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from field/value pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Set a field.
    pub fn set(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.0.insert(field.into(), value);
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    /// Scalar view of a field: `None` for absent or null, the text for
    /// strings, the printed form for numbers and booleans.
    pub fn scalar(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Number of fields the oracle returned.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the oracle returned nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The normalized, canonical record for one vehicle listing.
///
/// Every canonical field is present (possibly as the empty value);
/// unknown oracle keys never make it in. Field order follows the
/// vocabulary, which keeps serialized output stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    fields: IndexMap<String, FieldValue>,
}

impl VehicleRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record from a CSV row where every value is text.
    pub fn from_text_row(row: &IndexMap<String, String>) -> Self {
        let mut record = Self::new();
        for (field, value) in row {
            record.insert(field.clone(), FieldValue::text(value.clone()));
        }
        record
    }

    /// Set a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    /// Get a field value, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Text view of a field; empty string when absent or empty.
    pub fn text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// The dealer-assigned stock number, trimmed.
    pub fn stock_number(&self) -> String {
        self.text("Stock Number").trim().to_string()
    }

    /// Attach the watermarked-image URL produced by the image pipeline.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.insert("original_image_url", FieldValue::text(url.into()));
    }

    /// Iterate fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The axle-diagram record for one listing.
///
/// Keys are axle-position-prefixed attribute names (`R1 Dual Tires`,
/// `F8 Brake Type`). Which positions appear depends on the vehicle's
/// axle configuration; absent positions have no keys at all, and the
/// CSV writer renders missing columns as blanks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramRecord {
    fields: IndexMap<String, String>,
}

impl DiagramRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record from a CSV row.
    pub fn from_text_row(row: &IndexMap<String, String>) -> Self {
        let mut record = Self::new();
        for (field, value) in row {
            record.insert(field.clone(), value.clone());
        }
        record
    }

    /// Set a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field value, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Text view of a field; empty string when absent.
    pub fn text(&self, field: &str) -> String {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One listing's records, bundled for the whole run.
///
/// Bundling the vehicle record, diagram record, and source URL makes
/// the misalignment hazard of parallel lists unrepresentable: the
/// reconciliation stage stamps both records of the same bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Correlation ID threaded through every stage
    pub id: ListingId,

    /// The dealer page this listing was scraped from
    pub source_url: String,

    /// When the listing text was captured
    pub fetched_at: DateTime<Utc>,

    /// Normalized vehicle record
    pub vehicle: VehicleRecord,

    /// Derived axle-diagram record
    pub diagram: DiagramRecord,
}

impl ListingRecord {
    /// Bundle records for one listing under a fresh correlation ID.
    pub fn new(
        source_url: impl Into<String>,
        vehicle: VehicleRecord,
        diagram: DiagramRecord,
    ) -> Self {
        Self {
            id: ListingId::new(),
            source_url: source_url.into(),
            fetched_at: Utc::now(),
            vehicle,
            diagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_view() {
        let raw = RawExtraction::from_pairs([
            ("Stock Number", json!("A100")),
            ("Vehicle Year", json!(2019)),
            ("Engine Hours", json!(null)),
        ]);

        assert_eq!(raw.scalar("Stock Number").as_deref(), Some("A100"));
        assert_eq!(raw.scalar("Vehicle Year").as_deref(), Some("2019"));
        assert_eq!(raw.scalar("Engine Hours"), None);
        assert_eq!(raw.scalar("Wheelbase"), None);
    }

    #[test]
    fn test_vehicle_record_text_defaults_to_empty() {
        let mut record = VehicleRecord::new();
        record.insert("Stock Number", FieldValue::text(" A100 "));

        assert_eq!(record.text("Stock Number"), " A100 ");
        assert_eq!(record.stock_number(), "A100");
        assert_eq!(record.text("not a field"), "");
    }

    #[test]
    fn test_diagram_record_absent_key() {
        let mut record = DiagramRecord::new();
        record.insert("R1 Dual Tires", "yes");

        assert_eq!(record.get("R1 Dual Tires"), Some("yes"));
        assert_eq!(record.get("R3 Dual Tires"), None);
        assert_eq!(record.text("R3 Dual Tires"), "");
    }

    #[test]
    fn test_listing_ids_are_unique() {
        let a = ListingRecord::new("https://a", VehicleRecord::new(), DiagramRecord::new());
        let b = ListingRecord::new("https://b", VehicleRecord::new(), DiagramRecord::new());
        assert_ne!(a.id, b.id);
    }
}
