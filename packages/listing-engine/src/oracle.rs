//! The extraction-oracle seam.
//!
//! An [`ExtractionOracle`] answers "given this listing text, what are
//! the values of these fields" and returns a raw JSON object. The
//! engine never cares what sits behind the trait, which keeps the
//! normalization pipeline testable without a live backend.

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::{OracleError, OracleResult};
use crate::types::record::RawExtraction;
use crate::vocabulary::FieldHint;

/// A backend that extracts named fields from free listing text.
///
/// Implementations are expected to return one JSON object keyed by the
/// requested field names. Values may be strings, numbers, or null;
/// downstream coercion handles all of them.
#[async_trait]
pub trait ExtractionOracle: Send + Sync {
    /// Extract the hinted fields from the listing text.
    async fn extract(&self, text: &str, fields: &[FieldHint]) -> OracleResult<RawExtraction>;
}

/// Render field hints into the schema block of an extraction prompt,
/// one `field name: "...", meaning: "..."` line per field.
pub fn render_field_schema(fields: &[FieldHint]) -> String {
    let mut schema = String::new();
    for field in fields {
        schema.push_str(&format!(
            "field name: \"{}\", meaning: \"{}\".\n",
            field.name, field.meaning
        ));
    }
    schema
}

/// Recover the JSON object from a raw oracle response.
///
/// Backends wrap the payload in prose and code fences more often than
/// not, so this takes the span from the first `{` to the last `}` and
/// parses that. Null values are kept: a null answer means "asked but
/// unknown", which is distinct from a field that was never requested.
pub fn parse_oracle_response(response: &str) -> OracleResult<RawExtraction> {
    let start = response.find('{').ok_or(OracleError::MissingPayload)?;
    let end = response.rfind('}').ok_or(OracleError::MissingPayload)?;
    if end < start {
        return Err(OracleError::MissingPayload);
    }

    let payload = &response[start..=end];
    let fields: IndexMap<String, serde_json::Value> = serde_json::from_str(payload)?;
    Ok(RawExtraction(fields))
}
