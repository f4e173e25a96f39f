//! Subcommand implementations.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use listing_engine::{
    derive_diagram, read_rows, reconcile_batch, write_batch, DiagramDefaults, DiagramRecord,
    FieldValue, ListingRecord, MasterPriceIndex, RawExtraction, VehicleRecord, Vocabulary,
};

/// One captured extraction in the `normalize` input file.
#[derive(Debug, Deserialize)]
struct CapturedListing {
    source_url: String,
    fields: RawExtraction,
    #[serde(default)]
    text: Option<String>,
}

/// Normalize captured extractions and write the output tables.
pub fn run_normalize(input: &Path, master: Option<&Path>, out_dir: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let captured: Vec<CapturedListing> =
        serde_json::from_str(&contents).context("input is not a JSON array of listings")?;

    let index = load_index(master)?;
    let vocab = Vocabulary::standard();
    let defaults = DiagramDefaults::standard();

    let mut listings = Vec::with_capacity(captured.len());
    for item in &captured {
        let mut vehicle = listing_engine::normalize(&item.fields, &vocab);
        if let Some(text) = &item.text {
            if vehicle.text("Original info description").is_empty() {
                vehicle.insert("Original info description", FieldValue::text(text.clone()));
            }
        }

        let mut diagram = derive_diagram(&vehicle, &defaults);
        if !diagram.is_empty() {
            diagram.insert("Stock Number", vehicle.stock_number());
            diagram.insert("Listing", vehicle.text("Listing"));
        }
        listings.push(ListingRecord::new(item.source_url.clone(), vehicle, diagram));
    }

    reconcile_batch(&mut listings, &index);
    write_batch(out_dir, &listings).context("writing output tables")?;

    info!(
        listings = listings.len(),
        out_dir = %out_dir.display(),
        "normalize complete"
    );
    Ok(())
}

/// Re-classify existing output tables against a master snapshot.
pub fn run_reconcile(
    vehicles: &Path,
    diagrams: &Path,
    master: &Path,
    out_dir: &Path,
) -> Result<()> {
    let vehicle_rows = read_rows(vehicles)
        .with_context(|| format!("reading {}", vehicles.display()))?;
    let diagram_rows = read_rows(diagrams)
        .with_context(|| format!("reading {}", diagrams.display()))?;
    let index = MasterPriceIndex::from_csv_path(master)
        .with_context(|| format!("reading {}", master.display()))?;

    if vehicle_rows.len() != diagram_rows.len() {
        warn!(
            vehicles = vehicle_rows.len(),
            diagrams = diagram_rows.len(),
            "table lengths differ, pairing up to the shorter one"
        );
    }

    let mut listings: Vec<ListingRecord> = vehicle_rows
        .iter()
        .zip(diagram_rows.iter())
        .map(|(vehicle_row, diagram_row)| {
            let vehicle = VehicleRecord::from_text_row(vehicle_row);
            let source_url = vehicle.text("dealerURL");
            ListingRecord::new(
                source_url,
                vehicle,
                DiagramRecord::from_text_row(diagram_row),
            )
        })
        .collect();

    reconcile_batch(&mut listings, &index);
    write_batch(out_dir, &listings).context("writing output tables")?;

    info!(
        listings = listings.len(),
        out_dir = %out_dir.display(),
        "reconcile complete"
    );
    Ok(())
}

fn load_index(master: Option<&Path>) -> Result<MasterPriceIndex> {
    match master {
        Some(path) => MasterPriceIndex::from_csv_path(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            info!("no master snapshot given, every listing classifies as new");
            Ok(MasterPriceIndex::new())
        }
    }
}
