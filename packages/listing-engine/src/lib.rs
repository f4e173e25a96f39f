//! Normalization engine for heavy-truck dealer listings.
//!
//! The engine turns scraped listing text into two canonical tables: a
//! vehicle record per listing and an axle-diagram record for listings
//! whose configuration implies one. Raw field values come from an
//! [`ExtractionOracle`]; everything after that (coercion against the
//! canonical field table, diagram derivation, price reconciliation,
//! CSV output) is deterministic and offline.
//!
//! The typical flow:
//!
//! 1. [`pipeline::process_batch`] runs each listing through the oracle
//!    and the normalizer, then reconciles prices against the previous
//!    run's [`MasterPriceIndex`].
//! 2. [`output::write_batch`] appends the batch to the output tables.

pub mod coerce;
pub mod diagram;
pub mod error;
pub mod normalize;
pub mod oracle;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod reconcile;
pub mod testing;
pub mod types;
pub mod vocabulary;

pub use coerce::{coerce, MATCH_CUTOFF};
pub use diagram::{
    axle_positions, derive_diagram, diagram_field_hints, merge_oracle_attributes, AxlePosition,
    DiagramDefaults, PositionDefaults,
};
pub use error::{EngineError, OracleError, OracleResult, Result};
pub use normalize::normalize;
pub use oracle::{parse_oracle_response, render_field_schema, ExtractionOracle};
pub use output::{append_rows, read_rows, write_batch};
pub use pipeline::{process_batch, process_listing, BatchOutcome, ListingInput, ProcessSummary};
pub use project::{project_diagram, project_vehicle, DIAGRAM_COLUMNS, VEHICLE_COLUMNS};
pub use reconcile::{classify, reconcile_batch, MasterPriceIndex, UploadClassification};
pub use types::record::{DiagramRecord, ListingId, ListingRecord, RawExtraction, VehicleRecord};
pub use types::value::FieldValue;
pub use vocabulary::{FieldDomain, FieldHint, FieldRule, FieldSpec, MatchStrategy, Vocabulary};
