//! The listing pipeline: extract, normalize, derive, reconcile.
//!
//! One listing flows through two oracle passes. The first extracts the
//! canonical vehicle fields from the listing text; the diagram deriver
//! then decides which axle positions exist, and the second pass asks
//! only for the attributes of those positions. A failed second pass
//! degrades to the derived defaults rather than losing the listing.

use tracing::{info, warn};

use crate::diagram::{axle_positions, derive_diagram, diagram_field_hints, merge_oracle_attributes, DiagramDefaults};
use crate::error::Result;
use crate::normalize::normalize;
use crate::oracle::ExtractionOracle;
use crate::reconcile::{reconcile_batch, MasterPriceIndex, UploadClassification};
use crate::types::record::{ListingRecord, RawExtraction};
use crate::types::value::FieldValue;
use crate::vocabulary::Vocabulary;

/// One listing waiting to be processed.
#[derive(Debug, Clone)]
pub struct ListingInput {
    /// The dealer page the text came from
    pub source_url: String,

    /// The scraped listing text
    pub text: String,
}

impl ListingInput {
    pub fn new(source_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            text: text.into(),
        }
    }
}

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Listings that made it into the output
    pub processed: usize,

    /// Listings dropped because the first oracle pass failed
    pub skipped: usize,
}

impl ProcessSummary {
    /// True when nothing was skipped.
    pub fn is_success(&self) -> bool {
        self.skipped == 0
    }
}

/// Everything a batch run produced.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The processed listings, stamped with upload classifications
    pub listings: Vec<ListingRecord>,

    /// Classification per listing, in listing order
    pub classifications: Vec<UploadClassification>,

    /// Processed and skipped counts
    pub summary: ProcessSummary,
}

/// Process one listing: extract, normalize, and derive its diagram.
///
/// The second oracle pass is best-effort; if it fails the diagram keeps
/// its derived defaults with blank oracle attributes. A first-pass
/// failure is fatal for the listing and propagates.
pub async fn process_listing(
    oracle: &dyn ExtractionOracle,
    input: &ListingInput,
    vocab: &Vocabulary,
    defaults: &DiagramDefaults,
) -> Result<ListingRecord> {
    let raw = oracle.extract(&input.text, &vocab.field_hints()).await?;
    let mut vehicle = normalize(&raw, vocab);

    if vehicle.text("Original info description").is_empty() {
        vehicle.insert(
            "Original info description",
            FieldValue::text(input.text.clone()),
        );
    }

    let mut diagram = derive_diagram(&vehicle, defaults);
    let config = vehicle.text("OS - Axle Configuration");
    let positions = axle_positions(&config);
    if !positions.is_empty() {
        let hints = diagram_field_hints(positions);
        match oracle.extract(&input.text, &hints).await {
            Ok(raw_diagram) => merge_oracle_attributes(&mut diagram, &raw_diagram, positions),
            Err(error) => {
                warn!(
                    source_url = %input.source_url,
                    %error,
                    "diagram extraction failed, keeping derived defaults"
                );
                merge_oracle_attributes(&mut diagram, &RawExtraction::new(), positions);
            }
        }
    }

    // The diagram table carries its own copy of the identifiers.
    if !diagram.is_empty() {
        diagram.insert("Stock Number", vehicle.stock_number());
        diagram.insert("Listing", vehicle.text("Listing"));
    }

    Ok(ListingRecord::new(input.source_url.clone(), vehicle, diagram))
}

/// Process a batch of listings and reconcile it against the master
/// price index.
///
/// A listing whose extraction fails is skipped with a warning; the rest
/// of the batch proceeds.
pub async fn process_batch(
    oracle: &dyn ExtractionOracle,
    inputs: &[ListingInput],
    vocab: &Vocabulary,
    defaults: &DiagramDefaults,
    index: &MasterPriceIndex,
) -> BatchOutcome {
    let mut listings = Vec::with_capacity(inputs.len());
    let mut summary = ProcessSummary::default();

    for input in inputs {
        match process_listing(oracle, input, vocab, defaults).await {
            Ok(listing) => {
                listings.push(listing);
                summary.processed += 1;
            }
            Err(error) => {
                warn!(source_url = %input.source_url, %error, "skipping listing");
                summary.skipped += 1;
            }
        }
    }

    let classifications = reconcile_batch(&mut listings, index);
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "batch complete"
    );

    BatchOutcome {
        listings,
        classifications,
        summary,
    }
}
