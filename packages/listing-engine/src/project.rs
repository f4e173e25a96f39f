//! Column-ordered projection of records into output rows.
//!
//! Projection is pure: it copies what is present and emits an empty
//! string for what is not. Records with missing columns (the empty
//! diagram case included) project without error.

use crate::types::record::{DiagramRecord, VehicleRecord};

/// Output column order for the vehicle table.
pub const VEHICLE_COLUMNS: &[&str] = &[
    "Listing",
    "Stock Number",
    "dealerURL",
    "dealerUploadType",
    "OS - Vehicle Condition",
    "OS - Sleeper or Day Cab",
    "OS - Vehicle Year",
    "Vehicle Year",
    "OS - Vehicle Make",
    "Vehicle model - new",
    "Vehicle Price",
    "Odometer Miles",
    "OS - Vehicle Type",
    "OS - Vehicle Class",
    "glider",
    "VehicleVIN",
    "Ref Number",
    "U.S. State",
    "U.S. State (text)",
    "Company Address",
    "ECM Miles",
    "OS - Engine Make",
    "Engine Model",
    "Engine Horsepower",
    "Engine Displacement",
    "Engine Hours",
    "Engine Torque",
    "Engine Serial Number",
    "OS - Fuel Type",
    "OS - Number of Fuel Tanks",
    "Fuel Capacity",
    "OS - Transmission Speeds",
    "OS - Transmission Type",
    "OS - Transmission Make",
    "Transmission Model",
    "OS - Axle Configuration",
    "OS - Number of Front Axles",
    "OS - Number of Rear Axles",
    "Front Axle Capacity",
    "Rear Axle Capacity",
    "Rear Axle Ratio",
    "Wheelbase",
    "OS - Front Suspension Type",
    "OS - Rear Suspension Type",
    "OS - Fifth Wheel Type",
    "OS - Brake System Type",
    "OS - Vehicle Make Logo",
    "Location",
    "Not Active",
    "Unique id",
    "Original info description",
    "original_image_url",
];

/// Output column order for the diagram table: identifiers, then every
/// axle position times seven attributes.
pub const DIAGRAM_COLUMNS: &[&str] = &[
    "Stock Number",
    "Listing",
    "dealerURL",
    "dealerUploadType",
    "R1 Brake Type",
    "R1 Dual Tires",
    "R1 Lift Axle",
    "R1 Power Axle",
    "R1 Steer Axle",
    "R1 Tire Size",
    "R1 Wheel Material",
    "R2 Brake Type",
    "R2 Dual Tires",
    "R2 Lift Axle",
    "R2 Power Axle",
    "R2 Steer Axle",
    "R2 Tire Size",
    "R2 Wheel Material",
    "R3 Brake Type",
    "R3 Dual Tires",
    "R3 Lift Axle",
    "R3 Power Axle",
    "R3 Steer Axle",
    "R3 Tire Size",
    "R3 Wheel Material",
    "R4 Brake Type",
    "R4 Dual Tires",
    "R4 Lift Axle",
    "R4 Power Axle",
    "R4 Steer Axle",
    "R4 Tire Size",
    "R4 Wheel Material",
    "F5 Brake Type",
    "F5 Dual Tires",
    "F5 Lift Axle",
    "F5 Power Axle",
    "F5 Steer Axle",
    "F5 Tire Size",
    "F5 Wheel Material",
    "F6 Brake Type",
    "F6 Dual Tires",
    "F6 Lift Axle",
    "F6 Power Axle",
    "F6 Steer Axle",
    "F6 Tire Size",
    "F6 Wheel Material",
    "F7 Brake Type",
    "F7 Dual Tires",
    "F7 Lift Axle",
    "F7 Power Axle",
    "F7 Steer Axle",
    "F7 Tire Size",
    "F7 Wheel Material",
    "F8 Brake Type",
    "F8 Dual Tires",
    "F8 Lift Axle",
    "F8 Power Axle",
    "F8 Steer Axle",
    "F8 Tire Size",
    "F8 Wheel Material",
    "original_image_url",
];

/// Project a vehicle record into one row in column order.
pub fn project_vehicle(record: &VehicleRecord, columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| record.text(column)).collect()
}

/// Project a diagram record into one row in column order.
pub fn project_diagram(record: &DiagramRecord, columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| record.text(column)).collect()
}
