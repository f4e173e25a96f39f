//! Vehicle record normalization.
//!
//! The normalizer walks the canonical field table, not the keys the
//! oracle happened to return: every canonical field ends up present
//! (possibly empty) and unknown oracle keys are dropped.

use tracing::debug;

use crate::coerce::coerce;
use crate::diagram::axle_positions;
use crate::types::record::{RawExtraction, VehicleRecord};
use crate::types::value::FieldValue;
use crate::vocabulary::Vocabulary;

/// Normalize one raw extraction into a canonical vehicle record.
pub fn normalize(raw: &RawExtraction, vocab: &Vocabulary) -> VehicleRecord {
    let mut record = VehicleRecord::new();
    for (field, spec) in vocab.iter() {
        let scalar = raw.scalar(field);
        record.insert(field, coerce(scalar.as_deref(), &spec.domain));
    }
    apply_cross_field_rules(&mut record);
    record
}

/// Consistency rules that look at more than one field.
fn apply_cross_field_rules(record: &mut VehicleRecord) {
    // Front and rear suspension are the same assembly type on these
    // trucks; when only one side was stated, copy it across.
    let front = record.text("OS - Front Suspension Type");
    let rear = record.text("OS - Rear Suspension Type");
    if front.is_empty() && !rear.is_empty() {
        record.insert("OS - Front Suspension Type", FieldValue::text(rear));
    } else if rear.is_empty() && !front.is_empty() {
        record.insert("OS - Rear Suspension Type", FieldValue::text(front));
    }

    // A known axle configuration is authoritative for the axle counts,
    // overriding whatever the oracle guessed.
    let config = record.text("OS - Axle Configuration");
    let positions = axle_positions(&config);
    if !positions.is_empty() {
        let rear_count = positions.iter().filter(|p| p.is_rear()).count() as i64;
        let front_count = positions.len() as i64 - rear_count;
        record.insert("OS - Number of Rear Axles", FieldValue::Int(rear_count));
        record.insert("OS - Number of Front Axles", FieldValue::Int(front_count));
        debug!(%config, rear_count, front_count, "derived axle counts from configuration");
    }

    if record.text("Not Active").is_empty() {
        record.insert("Not Active", FieldValue::Int(1));
    }

    // Assigned downstream by the upload target, never by us.
    record.insert("Unique id", FieldValue::empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vocab() -> Vocabulary {
        Vocabulary::standard()
    }

    #[test]
    fn test_every_canonical_field_is_present() {
        let raw = RawExtraction::from_pairs([("Stock Number", json!("A100"))]);
        let record = normalize(&raw, &vocab());

        assert_eq!(record.len(), vocab().len());
        assert_eq!(record.text("Stock Number"), "A100");
        // Absent fields coerce from null to empty.
        assert_eq!(record.text("Engine Model"), "");
    }

    #[test]
    fn test_unknown_oracle_keys_are_dropped() {
        let raw = RawExtraction::from_pairs([
            ("Stock Number", json!("A100")),
            ("Cup Holders", json!("4")),
        ]);
        let record = normalize(&raw, &vocab());
        assert!(record.get("Cup Holders").is_none());
    }

    #[test]
    fn test_suspension_copied_when_one_side_known() {
        let raw = RawExtraction::from_pairs([("OS - Rear Suspension Type", json!("Air Ride"))]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.text("OS - Front Suspension Type"), "Air Ride");
        assert_eq!(record.text("OS - Rear Suspension Type"), "Air Ride");
    }

    #[test]
    fn test_suspension_not_touched_when_both_known() {
        let raw = RawExtraction::from_pairs([
            ("OS - Front Suspension Type", json!("Spring")),
            ("OS - Rear Suspension Type", json!("Air Ride")),
        ]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.text("OS - Front Suspension Type"), "Spring");
        assert_eq!(record.text("OS - Rear Suspension Type"), "Air Ride");
    }

    #[test]
    fn test_axle_counts_follow_configuration() {
        let raw = RawExtraction::from_pairs([
            ("OS - Axle Configuration", json!("tandem")),
            // Oracle guessed wrong; configuration wins.
            ("OS - Number of Rear Axles", json!("4")),
        ]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.text("OS - Axle Configuration"), "6 x 4");
        assert_eq!(record.get("OS - Number of Rear Axles"), Some(&FieldValue::Int(2)));
        assert_eq!(record.get("OS - Number of Front Axles"), Some(&FieldValue::Int(1)));
    }

    #[test]
    fn test_axle_counts_kept_when_configuration_unknown() {
        let raw = RawExtraction::from_pairs([("OS - Number of Rear Axles", json!("3"))]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.text("OS - Axle Configuration"), "");
        assert_eq!(record.text("OS - Number of Rear Axles"), "3");
    }

    #[test]
    fn test_not_active_defaults_to_one() {
        let record = normalize(&RawExtraction::new(), &vocab());
        assert_eq!(record.get("Not Active"), Some(&FieldValue::Int(1)));

        let raw = RawExtraction::from_pairs([("Not Active", json!("0"))]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.get("Not Active"), Some(&FieldValue::Int(0)));
    }

    #[test]
    fn test_unique_id_always_empty() {
        let raw = RawExtraction::from_pairs([("Unique id", json!("abc-123"))]);
        let record = normalize(&raw, &vocab());
        assert_eq!(record.text("Unique id"), "");
    }

    #[test]
    fn test_derived_constants_always_set() {
        let record = normalize(&RawExtraction::new(), &vocab());
        assert_eq!(record.text("OS - Vehicle Type"), "Semi-tractor truck");
        assert_eq!(record.text("OS - Vehicle Class"), "Class 8");
    }
}
