//! Canonical field values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coerced canonical value: an integer, a float, or free text.
///
/// The empty string is the universal "no value" marker. Coercion never
/// produces null and never fails, so downstream CSV writers can treat
/// every field uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Whole number (no decimal point in the raw input)
    Int(i64),

    /// Fractional number
    Float(f64),

    /// Free text, possibly empty
    Text(String),
}

impl FieldValue {
    /// The empty value.
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// True for the empty-text value.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// Borrow the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        assert!(FieldValue::empty().is_empty());
        assert!(!FieldValue::text("x").is_empty());
        assert!(!FieldValue::Int(0).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Int(45000).to_string(), "45000");
        assert_eq!(FieldValue::Float(3.55).to_string(), "3.55");
        assert_eq!(FieldValue::text("Texas").to_string(), "Texas");
        assert_eq!(FieldValue::empty().to_string(), "");
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(FieldValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(FieldValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(FieldValue::text("2").as_f64(), None);
    }

    #[test]
    fn test_untagged_serde() {
        let json = serde_json::to_string(&FieldValue::Int(7)).unwrap();
        assert_eq!(json, "7");
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FieldValue::Int(7));

        let text: FieldValue = serde_json::from_str("\"6 x 4\"").unwrap();
        assert_eq!(text, FieldValue::text("6 x 4"));
    }
}
