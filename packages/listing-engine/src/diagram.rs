//! Axle-diagram derivation.
//!
//! The axle configuration alone decides which positions exist on the
//! diagram; four of the seven per-position attributes are deterministic
//! defaults, the remaining three (brake type, tire size, wheel
//! material) come back from a second oracle pass over the listing text.

use indexmap::IndexMap;

use crate::types::record::{DiagramRecord, RawExtraction, VehicleRecord};
use crate::vocabulary::FieldHint;

/// A position on the axle diagram. Front positions count down from F8
/// (the primary steer axle), rear positions up from R1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxlePosition {
    R1,
    R2,
    R3,
    R4,
    F5,
    F6,
    F7,
    F8,
}

impl AxlePosition {
    /// The key prefix used in diagram records and CSV columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            AxlePosition::R1 => "R1",
            AxlePosition::R2 => "R2",
            AxlePosition::R3 => "R3",
            AxlePosition::R4 => "R4",
            AxlePosition::F5 => "F5",
            AxlePosition::F6 => "F6",
            AxlePosition::F7 => "F7",
            AxlePosition::F8 => "F8",
        }
    }

    /// True for R1..R4.
    pub fn is_rear(&self) -> bool {
        matches!(
            self,
            AxlePosition::R1 | AxlePosition::R2 | AxlePosition::R3 | AxlePosition::R4
        )
    }

    /// Every position, in diagram-column order.
    pub const ALL: [AxlePosition; 8] = [
        AxlePosition::R1,
        AxlePosition::R2,
        AxlePosition::R3,
        AxlePosition::R4,
        AxlePosition::F5,
        AxlePosition::F6,
        AxlePosition::F7,
        AxlePosition::F8,
    ];
}

/// Attributes the deriver fills with fixed defaults.
pub const DERIVED_ATTRIBUTES: [&str; 4] = ["Dual Tires", "Lift Axle", "Power Axle", "Steer Axle"];

/// Attributes requested from the oracle for each present position.
pub const ORACLE_ATTRIBUTES: [&str; 3] = ["Brake Type", "Tire Size", "Wheel Material"];

/// The positions implied by an axle configuration.
///
/// Unrecognized configurations yield an empty slice: a diagram with no
/// positions is a valid degenerate case, not an error.
pub fn axle_positions(config: &str) -> &'static [AxlePosition] {
    use AxlePosition::*;
    match config {
        "4 x 2" | "4 x 4" | "6 x 2" => &[F8, R1],
        "6 x 4" | "6 x 6" => &[F8, R1, R2],
        "8 x 2" => &[F8, F7, R1],
        "8 x 4" | "8 x 8" | "10 x 4" => &[F8, F7, R1, R2],
        "8 x 6" => &[F8, R1, R2, R3],
        "10 x 6" => &[F8, F7, R1, R2, R3],
        "10 x 8" => &[F8, F7, F6, R1, R2],
        _ => &[],
    }
}

/// Default values for the four derived attributes of one position, in
/// [`DERIVED_ATTRIBUTES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDefaults {
    pub dual_tires: &'static str,
    pub lift_axle: &'static str,
    pub power_axle: &'static str,
    pub steer_axle: &'static str,
}

/// Per-position defaults for the derived diagram attributes.
///
/// The standard values are literal per-position constants. R3
/// and R4 intentionally differ from R1 and R2 (pusher/tag axles rather
/// than drive axles); that asymmetry is configuration, not a bug to
/// unify.
#[derive(Debug, Clone)]
pub struct DiagramDefaults {
    by_position: IndexMap<AxlePosition, PositionDefaults>,
}

impl DiagramDefaults {
    /// The production defaults table.
    pub fn standard() -> Self {
        use AxlePosition::*;
        let drive = PositionDefaults {
            dual_tires: "yes",
            lift_axle: "no",
            power_axle: "yes",
            steer_axle: "no",
        };
        let lift = PositionDefaults {
            dual_tires: "no",
            lift_axle: "yes",
            power_axle: "no",
            steer_axle: "no",
        };
        let steer = PositionDefaults {
            dual_tires: "no",
            lift_axle: "no",
            power_axle: "no",
            steer_axle: "yes",
        };

        let mut by_position = IndexMap::new();
        by_position.insert(R1, drive);
        by_position.insert(R2, drive);
        by_position.insert(R3, lift);
        by_position.insert(R4, lift);
        by_position.insert(F5, steer);
        by_position.insert(F6, steer);
        by_position.insert(F7, steer);
        by_position.insert(F8, steer);
        Self { by_position }
    }

    /// Defaults for a position, if configured.
    pub fn get(&self, position: AxlePosition) -> Option<&PositionDefaults> {
        self.by_position.get(&position)
    }

    /// Override the defaults for one position.
    pub fn set(&mut self, position: AxlePosition, defaults: PositionDefaults) {
        self.by_position.insert(position, defaults);
    }
}

impl Default for DiagramDefaults {
    fn default() -> Self {
        Self::standard()
    }
}

/// Derive the diagram record for a normalized vehicle.
///
/// Only the positions implied by `OS - Axle Configuration` appear; each
/// carries the four derived attributes. Positions not implied by the
/// configuration are entirely absent, so the CSV writer leaves their
/// columns blank.
pub fn derive_diagram(vehicle: &VehicleRecord, defaults: &DiagramDefaults) -> DiagramRecord {
    let config = vehicle.text("OS - Axle Configuration");
    let mut record = DiagramRecord::new();
    for position in axle_positions(&config) {
        let prefix = position.as_str();
        match defaults.get(*position) {
            Some(d) => {
                record.insert(format!("{prefix} Dual Tires"), d.dual_tires);
                record.insert(format!("{prefix} Lift Axle"), d.lift_axle);
                record.insert(format!("{prefix} Power Axle"), d.power_axle);
                record.insert(format!("{prefix} Steer Axle"), d.steer_axle);
            }
            None => {
                for attribute in DERIVED_ATTRIBUTES {
                    record.insert(format!("{prefix} {attribute}"), "");
                }
            }
        }
    }
    record
}

/// Oracle hints for the second extraction pass: brake type, tire size,
/// and wheel material for each present position.
pub fn diagram_field_hints(positions: &[AxlePosition]) -> Vec<FieldHint> {
    let mut hints = Vec::with_capacity(positions.len() * ORACLE_ATTRIBUTES.len());
    for position in positions {
        let prefix = position.as_str();
        let wheel_kind = if position.is_rear() {
            "the rear wheel type"
        } else {
            "the steer wheel type"
        };
        hints.push(FieldHint::new(
            format!("{prefix} Brake Type"),
            "the type of brakes, Disc or Drum, or an empty string if not specified",
        ));
        hints.push(FieldHint::new(format!("{prefix} Tire Size"), "the tire size"));
        hints.push(FieldHint::new(
            format!("{prefix} Wheel Material"),
            format!("{wheel_kind}, either Steel or Aluminum"),
        ));
    }
    hints
}

/// Merge oracle-returned attributes into a derived diagram.
///
/// Only the oracle attributes of present positions are taken; the
/// derived defaults are never overwritten and absent positions stay
/// absent no matter what the oracle claims.
pub fn merge_oracle_attributes(
    diagram: &mut DiagramRecord,
    raw: &RawExtraction,
    positions: &[AxlePosition],
) {
    for position in positions {
        let prefix = position.as_str();
        for attribute in ORACLE_ATTRIBUTES {
            let key = format!("{prefix} {attribute}");
            match raw.scalar(&key) {
                Some(value) => diagram.insert(key, value.trim()),
                None => {
                    if diagram.get(&key).is_none() {
                        diagram.insert(key, "");
                    }
                }
            }
        }
    }
}
