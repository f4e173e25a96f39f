//! End-to-end pipeline tests: mock oracle in, CSV tables out.

use serde_json::json;
use uuid::Uuid;

use listing_engine::testing::MockOracle;
use listing_engine::{
    process_batch, read_rows, write_batch, DiagramDefaults, ListingInput, MasterPriceIndex,
    RawExtraction, UploadClassification, Vocabulary,
};

#[tokio::test]
async fn tandem_listing_flows_through_to_reconciled_tables() {
    let oracle = MockOracle::new();
    oracle.push_response(RawExtraction::from_pairs([
        ("Listing", json!("2019 Freightliner Cascadia 126")),
        ("Stock Number", json!("A100")),
        ("OS - Axle Configuration", json!("tandem")),
        ("Vehicle Price", json!("$50,000")),
        ("OS - Vehicle Condition", json!("Used")),
        ("OS - Transmission Make", json!("eaton")),
        ("OS - Transmission Speeds", json!("10")),
        ("U.S. State", json!("OH")),
    ]));
    oracle.push_response(RawExtraction::from_pairs([
        ("R1 Brake Type", json!("Drum")),
        ("F8 Wheel Material", json!("Aluminum")),
    ]));

    let inputs = vec![ListingInput::new(
        "https://dealer.example/a100",
        "2019 Freightliner Cascadia 126, tandem axle, stock #A100, $50,000",
    )];
    let index = MasterPriceIndex::from_pairs([("A100", "50000")]);

    let outcome = process_batch(
        &oracle,
        &inputs,
        &Vocabulary::standard(),
        &DiagramDefaults::standard(),
        &index,
    )
    .await;

    assert!(outcome.summary.is_success());
    assert_eq!(outcome.classifications, vec![UploadClassification::Present]);

    let vehicle = &outcome.listings[0].vehicle;
    assert_eq!(vehicle.text("OS - Axle Configuration"), "6 x 4");
    assert_eq!(vehicle.text("OS - Number of Rear Axles"), "2");
    assert_eq!(vehicle.text("OS - Number of Front Axles"), "1");
    assert_eq!(vehicle.text("OS - Vehicle Condition"), "Pre-Owned");
    assert_eq!(vehicle.text("OS - Transmission Make"), "Eaton Fuller");
    assert_eq!(vehicle.text("OS - Transmission Speeds"), "10-speed");
    assert_eq!(vehicle.text("U.S. State"), "Ohio");
    assert_eq!(vehicle.text("OS - Vehicle Type"), "Semi-tractor truck");
    assert_eq!(vehicle.text("dealerUploadType"), "present");
    assert_eq!(vehicle.text("dealerURL"), "https://dealer.example/a100");

    let diagram = &outcome.listings[0].diagram;
    assert_eq!(diagram.get("Stock Number"), Some("A100"));
    assert_eq!(diagram.get("R1 Brake Type"), Some("Drum"));
    assert_eq!(diagram.get("R1 Dual Tires"), Some("yes"));
    assert_eq!(diagram.get("F8 Steer Axle"), Some("yes"));
    assert_eq!(diagram.get("F8 Wheel Material"), Some("Aluminum"));
    assert_eq!(diagram.get("dealerUploadType"), Some("present"));
    assert_eq!(diagram.get("R3 Dual Tires"), None);
}

#[tokio::test]
async fn batch_output_round_trips_through_csv() {
    let oracle = MockOracle::new();
    oracle.push_response(RawExtraction::from_pairs([
        ("Stock Number", json!("C300")),
        ("OS - Axle Configuration", json!("6 x 4")),
        ("Vehicle Price", json!(72000)),
    ]));
    oracle.push_response(RawExtraction::new());

    let inputs = vec![ListingInput::new("https://dealer.example/c300", "listing text")];
    let outcome = process_batch(
        &oracle,
        &inputs,
        &Vocabulary::standard(),
        &DiagramDefaults::standard(),
        &MasterPriceIndex::new(),
    )
    .await;
    assert_eq!(outcome.classifications, vec![UploadClassification::New]);

    let dir = std::env::temp_dir().join(format!("listing-engine-e2e-{}", Uuid::new_v4()));
    write_batch(&dir, &outcome.listings).unwrap();

    let vehicles = read_rows(&dir.join("vehicle_info.csv")).unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["Stock Number"], "C300");
    assert_eq!(vehicles[0]["Vehicle Price"], "72000");
    assert_eq!(vehicles[0]["dealerUploadType"], "new");
    assert_eq!(vehicles[0]["OS - Vehicle Class"], "Class 8");
    assert_eq!(vehicles[0]["Not Active"], "1");

    let diagrams = read_rows(&dir.join("diagram_data.csv")).unwrap();
    assert_eq!(diagrams.len(), 1);
    assert_eq!(diagrams[0]["Stock Number"], "C300");
    assert_eq!(diagrams[0]["R2 Power Axle"], "yes");
    assert_eq!(diagrams[0]["R1 Brake Type"], "");
    assert_eq!(diagrams[0]["R4 Dual Tires"], "");

    // A second run appends without repeating the header.
    write_batch(&dir, &outcome.listings).unwrap();
    let vehicles = read_rows(&dir.join("vehicle_info.csv")).unwrap();
    assert_eq!(vehicles.len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}
