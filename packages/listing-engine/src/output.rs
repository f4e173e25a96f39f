//! Append-only CSV output.
//!
//! Each run appends its rows to the output tables; the header is
//! written only when a file is new or empty. Column order is fixed by
//! the projectors, so every appended run lines up with the header the
//! first run wrote.

use indexmap::IndexMap;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::project::{project_diagram, project_vehicle, DIAGRAM_COLUMNS, VEHICLE_COLUMNS};
use crate::types::record::ListingRecord;

/// Append rows to a CSV file, writing the header first when the file is
/// new or empty.
pub fn append_rows(path: &Path, columns: &[&str], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let needs_header = match std::fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if needs_header {
        writer.write_record(columns)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "appended rows");
    Ok(())
}

/// Write a processed batch to `vehicle_info.csv` and `diagram_data.csv`
/// under the output directory.
///
/// Every listing contributes a vehicle row; only listings with a
/// non-empty diagram contribute a diagram row.
pub fn write_batch(dir: &Path, listings: &[ListingRecord]) -> Result<()> {
    let vehicle_rows: Vec<Vec<String>> = listings
        .iter()
        .map(|listing| project_vehicle(&listing.vehicle, VEHICLE_COLUMNS))
        .collect();
    append_rows(&dir.join("vehicle_info.csv"), VEHICLE_COLUMNS, &vehicle_rows)?;

    let diagram_rows: Vec<Vec<String>> = listings
        .iter()
        .filter(|listing| !listing.diagram.is_empty())
        .map(|listing| project_diagram(&listing.diagram, DIAGRAM_COLUMNS))
        .collect();
    append_rows(&dir.join("diagram_data.csv"), DIAGRAM_COLUMNS, &diagram_rows)?;

    Ok(())
}

/// Read a CSV file back as one header-keyed map per row.
pub fn read_rows(path: &Path) -> Result<Vec<IndexMap<String, String>>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: IndexMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::{DiagramRecord, VehicleRecord};
    use crate::types::value::FieldValue;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("listing-engine-test-{}", Uuid::new_v4()))
    }

    fn listing(stock: &str, with_diagram: bool) -> ListingRecord {
        let mut vehicle = VehicleRecord::new();
        vehicle.insert("Stock Number", FieldValue::text(stock));
        vehicle.insert("Vehicle Price", FieldValue::Int(50000));
        let mut diagram = DiagramRecord::new();
        if with_diagram {
            diagram.insert("Stock Number", stock);
            diagram.insert("R1 Dual Tires", "yes");
        }
        ListingRecord::new("https://dealer.example/x", vehicle, diagram)
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = scratch_dir();
        let path = dir.join("vehicle_info.csv");

        append_rows(&path, &["A", "B"], &[vec!["1".into(), "2".into()]]).unwrap();
        append_rows(&path, &["A", "B"], &[vec!["3".into(), "4".into()]]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("A,B").count(), 1);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["A"], "3");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_batch_splits_tables() {
        let dir = scratch_dir();
        let listings = vec![listing("A100", true), listing("B200", false)];

        write_batch(&dir, &listings).unwrap();

        let vehicles = read_rows(&dir.join("vehicle_info.csv")).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0]["Stock Number"], "A100");
        assert_eq!(vehicles[1]["Stock Number"], "B200");

        // Only the listing with a diagram lands in the diagram table.
        let diagrams = read_rows(&dir.join("diagram_data.csv")).unwrap();
        assert_eq!(diagrams.len(), 1);
        assert_eq!(diagrams[0]["Stock Number"], "A100");
        assert_eq!(diagrams[0]["R1 Dual Tires"], "yes");
        // Absent positions render as blanks.
        assert_eq!(diagrams[0]["R3 Dual Tires"], "");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
