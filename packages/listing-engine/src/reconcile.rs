//! Price reconciliation against the previous run's master index.
//!
//! The master index is the price snapshot captured by the last run,
//! keyed by stock number. Comparing a new batch against it tells the
//! uploader whether each listing is new inventory, unchanged, or a
//! price update. A stock number missing from the index is the normal
//! `new` path, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, Result};
use crate::types::record::{ListingRecord, VehicleRecord};
use crate::types::value::FieldValue;

/// Prices within this absolute difference count as unchanged.
const PRICE_TOLERANCE: f64 = 0.01;

/// How a listing's price compares to the previously captured snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadClassification {
    /// Stock number not present in the master index
    New,

    /// Present with an unchanged price
    Present,

    /// Present with a changed price
    Update,
}

impl UploadClassification {
    /// The token written to the `dealerUploadType` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadClassification::New => "new",
            UploadClassification::Present => "present",
            UploadClassification::Update => "update",
        }
    }
}

impl fmt::Display for UploadClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The read-only price snapshot from the previous run.
#[derive(Debug, Clone)]
pub struct MasterPriceIndex {
    prices: HashMap<String, String>,
    loaded_at: DateTime<Utc>,
}

impl MasterPriceIndex {
    /// An empty index; every listing classifies as `new`.
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Build from stock-number/price pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prices: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            loaded_at: Utc::now(),
        }
    }

    /// Load the index from a snapshot CSV.
    ///
    /// Requires a `Stock Number` column and either a `Price` or a
    /// `Vehicle Price` column.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the index from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let stock_idx = headers
            .iter()
            .position(|h| h == "Stock Number")
            .ok_or_else(|| EngineError::MissingColumn {
                column: "Stock Number".to_string(),
            })?;
        let price_idx = headers
            .iter()
            .position(|h| h == "Price")
            .or_else(|| headers.iter().position(|h| h == "Vehicle Price"))
            .ok_or_else(|| EngineError::MissingColumn {
                column: "Price".to_string(),
            })?;

        let mut prices = HashMap::new();
        for row in csv_reader.records() {
            let row = row?;
            let stock = row.get(stock_idx).unwrap_or("").trim();
            if stock.is_empty() {
                continue;
            }
            let price = row.get(price_idx).unwrap_or("").trim();
            prices.insert(stock.to_string(), price.to_string());
        }

        info!(entries = prices.len(), "loaded master price index");
        Ok(Self {
            prices,
            loaded_at: Utc::now(),
        })
    }

    /// The recorded price for a stock number, if indexed.
    pub fn price(&self, stock_number: &str) -> Option<&str> {
        self.prices.get(stock_number).map(String::as_str)
    }

    /// When the snapshot was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of indexed stock numbers.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for MasterPriceIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a price, tolerating `$`, thousands separators, and padding.
/// The empty string parses as zero, so two unpriced listings compare
/// equal.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.trim().is_empty() {
        return Some(0.0);
    }
    cleaned.trim().parse::<f64>().ok()
}

/// Classify one vehicle record against the master index.
///
/// Numeric comparison with [`PRICE_TOLERANCE`] when both prices parse;
/// exact string equality otherwise. Parse failure is recovered locally,
/// never escalated.
pub fn classify(record: &VehicleRecord, index: &MasterPriceIndex) -> UploadClassification {
    let stock_number = record.stock_number();
    let Some(indexed) = index.price(&stock_number) else {
        return UploadClassification::New;
    };

    let listed = record.text("Vehicle Price");
    match (parse_price(&listed), parse_price(indexed)) {
        (Some(a), Some(b)) if (a - b).abs() < PRICE_TOLERANCE => UploadClassification::Present,
        (Some(_), Some(_)) => UploadClassification::Update,
        _ => {
            if listed.trim() == indexed.trim() {
                UploadClassification::Present
            } else {
                UploadClassification::Update
            }
        }
    }
}

/// Classify a batch and stamp `dealerURL` and `dealerUploadType` onto
/// both records of every listing.
///
/// Returns the classifications in listing order. Because each listing
/// bundles its own vehicle record, diagram record, and source URL,
/// there is no parallel-list pairing to misalign.
pub fn reconcile_batch(
    listings: &mut [ListingRecord],
    index: &MasterPriceIndex,
) -> Vec<UploadClassification> {
    let mut classifications = Vec::with_capacity(listings.len());
    let (mut new, mut present, mut update) = (0usize, 0usize, 0usize);

    for listing in listings.iter_mut() {
        let classification = classify(&listing.vehicle, index);
        match classification {
            UploadClassification::New => new += 1,
            UploadClassification::Present => present += 1,
            UploadClassification::Update => update += 1,
        }

        listing
            .vehicle
            .insert("dealerURL", FieldValue::text(listing.source_url.clone()));
        listing
            .vehicle
            .insert("dealerUploadType", FieldValue::text(classification.as_str()));
        listing.diagram.insert("dealerURL", listing.source_url.clone());
        listing
            .diagram
            .insert("dealerUploadType", classification.as_str());

        classifications.push(classification);
    }

    info!(total = listings.len(), new, present, update, "reconciled batch");
    classifications
}
