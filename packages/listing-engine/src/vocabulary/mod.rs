//! The canonical field table.
//!
//! Every output field has a domain (how its raw value is coerced) and a
//! natural-language hint (what the extraction oracle is asked for). The
//! table is an immutable value passed into the normalizer, so tests can
//! substitute smaller tables instead of patching globals.

pub mod options;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a closed enumeration is matched against raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Pick the highest-scoring option no matter how weak the match.
    /// Used for the model catalog, where dealer text is noisy but some
    /// answer is always wanted.
    BestEffort,

    /// Only accept a candidate that clears the similarity cutoff;
    /// otherwise the field stays empty. The default for most fields.
    Threshold,
}

/// Named per-field adjustment applied around the generic matcher.
///
/// These are deliberate, documented rules, not fuzzy-match accidents,
/// so they live by name in the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Vehicle condition "Used" is published as "Pre-Owned".
    ConditionPreOwned,

    /// Dealers write the bare make "eaton"; the catalog name is
    /// "Eaton Fuller".
    EatonFuller,

    /// Two-letter US state codes map straight to full names before any
    /// fuzzy matching happens.
    StateAbbreviation,

    /// Bare digits like "10" mean "10-speed"; no fuzzy matching.
    NumericSpeeds,

    /// Dealer shorthand for axle configurations: "tandem" is a 6 x 4,
    /// "single" a 4 x 2.
    AxleShorthand,
}

/// The domain of one canonical field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDomain {
    /// Numeric: strip currency noise, parse int or float.
    Number,

    /// Free text, trimmed and passed through.
    FreeText,

    /// Strict "yes"/"no", anything else is empty.
    YesNo,

    /// Closed enumeration matched fuzzily.
    ClosedEnum {
        options: &'static [&'static str],
        strategy: MatchStrategy,
        rule: Option<FieldRule>,
    },

    /// Fixed constant regardless of what the oracle said.
    DerivedConstant(&'static str),
}

impl FieldDomain {
    /// Closed enum with the threshold strategy and no named rule.
    pub fn closed(options: &'static [&'static str]) -> Self {
        FieldDomain::ClosedEnum {
            options,
            strategy: MatchStrategy::Threshold,
            rule: None,
        }
    }

    /// Closed enum with the threshold strategy and a named rule.
    pub fn closed_with_rule(options: &'static [&'static str], rule: FieldRule) -> Self {
        FieldDomain::ClosedEnum {
            options,
            strategy: MatchStrategy::Threshold,
            rule: Some(rule),
        }
    }

    /// Closed enum matched best-effort over the whole option list.
    pub fn best_effort(options: &'static [&'static str]) -> Self {
        FieldDomain::ClosedEnum {
            options,
            strategy: MatchStrategy::BestEffort,
            rule: None,
        }
    }
}

/// A field name with its natural-language meaning, the unit the oracle
/// contract is written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHint {
    pub name: String,
    pub meaning: String,
}

impl FieldHint {
    /// Create a hint.
    pub fn new(name: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meaning: meaning.into(),
        }
    }
}

/// Domain plus oracle hint for one canonical field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub domain: FieldDomain,
    pub hint: &'static str,
}

/// The immutable canonical field table.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    fields: IndexMap<&'static str, FieldSpec>,
}

impl Vocabulary {
    /// An empty table; add fields with [`Vocabulary::with_field`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a field. Builder-style, mostly for tests.
    pub fn with_field(
        mut self,
        name: &'static str,
        domain: FieldDomain,
        hint: &'static str,
    ) -> Self {
        self.fields.insert(name, FieldSpec { domain, hint });
        self
    }

    /// Domain of a field, if the field is canonical.
    pub fn domain(&self, field: &str) -> Option<&FieldDomain> {
        self.fields.get(field).map(|spec| &spec.domain)
    }

    /// Iterate fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (*name, spec))
    }

    /// Field names in canonical order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// The oracle hints for every field, in canonical order.
    pub fn field_hints(&self) -> Vec<FieldHint> {
        self.fields
            .iter()
            .map(|(name, spec)| FieldHint::new(*name, spec.hint))
            .collect()
    }

    /// Number of canonical fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the table has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The full production field table.
    pub fn standard() -> Self {
        use options::*;
        use FieldDomain as D;

        Self::empty()
            .with_field("Company Address", D::FreeText, "the dealer's street address, or an empty string")
            .with_field("ECM Miles", D::Number, "miles recorded by the engine control module")
            .with_field("Engine Displacement", D::Number, "engine displacement in liters")
            .with_field("Engine Horsepower", D::Number, "engine horsepower as a number")
            .with_field("Engine Hours", D::Number, "total engine hours")
            .with_field("Engine Model", D::FreeText, "the engine model designation, e.g. DD15 or X15")
            .with_field("Engine Serial Number", D::FreeText, "the engine serial number")
            .with_field("Engine Torque", D::FreeText, "engine torque, e.g. 1850 lb-ft")
            .with_field("Front Axle Capacity", D::Number, "front axle weight rating in pounds")
            .with_field("Fuel Capacity", D::Number, "total fuel capacity in gallons")
            .with_field("glider", D::YesNo, "yes if the truck is a glider kit, otherwise no")
            .with_field("Listing", D::FreeText, "the listing title")
            .with_field("Location", D::FreeText, "the city and state where the truck is located")
            .with_field("Not Active", D::Number, "always the numeric value 1")
            .with_field("Odometer Miles", D::Number, "odometer reading in miles")
            .with_field(
                "OS - Axle Configuration",
                D::closed_with_rule(AXLE_CONFIGURATIONS, FieldRule::AxleShorthand),
                "the axle configuration such as 6 x 4; tandem axle means 6 x 4, single axle means 4 x 2",
            )
            .with_field("OS - Brake System Type", D::closed(BRAKE_SYSTEM_TYPES), "Air or Hydraulic brakes")
            .with_field("OS - Engine Make", D::closed(ENGINE_MAKES), "the engine manufacturer")
            .with_field("OS - Fifth Wheel Type", D::closed(FIFTH_WHEEL_TYPES), "Fixed or Sliding fifth wheel")
            .with_field("OS - Front Suspension Type", D::closed(SUSPENSION_TYPES), "Air Ride or Spring front suspension")
            .with_field("OS - Fuel Type", D::closed(FUEL_TYPES), "the fuel type, usually Diesel")
            .with_field("OS - Number of Front Axles", D::closed(FRONT_AXLE_COUNTS), "how many front axles")
            .with_field("OS - Number of Fuel Tanks", D::closed(FUEL_TANK_COUNTS), "how many fuel tanks")
            .with_field("OS - Number of Rear Axles", D::closed(REAR_AXLE_COUNTS), "how many rear axles")
            .with_field("OS - Rear Suspension Type", D::closed(SUSPENSION_TYPES), "Air Ride or Spring rear suspension")
            .with_field("OS - Sleeper or Day Cab", D::closed(CAB_STYLES), "Day Cab or Sleeper Cab")
            .with_field(
                "OS - Transmission Make",
                D::closed_with_rule(TRANSMISSION_MAKES, FieldRule::EatonFuller),
                "the transmission manufacturer; eaton means Eaton Fuller",
            )
            .with_field(
                "OS - Transmission Speeds",
                D::closed_with_rule(TRANSMISSION_SPEEDS, FieldRule::NumericSpeeds),
                "the number of transmission speeds, e.g. 10-speed",
            )
            .with_field("OS - Transmission Type", D::closed(TRANSMISSION_TYPES), "Automatic or Manual")
            .with_field("OS - Vehicle Class", D::DerivedConstant("Class 8"), "always Class 8")
            .with_field(
                "OS - Vehicle Condition",
                D::closed_with_rule(VEHICLE_CONDITIONS, FieldRule::ConditionPreOwned),
                "New, Pre-Owned, or Used",
            )
            .with_field("OS - Vehicle Make", D::closed(VEHICLE_MAKES), "the truck manufacturer")
            .with_field("OS - Vehicle Make Logo", D::FreeText, "leave empty")
            .with_field("OS - Vehicle Type", D::DerivedConstant("Semi-tractor truck"), "always Semi-tractor truck")
            .with_field("OS - Vehicle Year", D::Number, "the model year")
            .with_field("Rear Axle Capacity", D::Number, "rear axle weight rating in pounds")
            .with_field("Rear Axle Ratio", D::Number, "rear axle ratio, e.g. 3.55")
            .with_field("Ref Number", D::FreeText, "the dealer's reference number, or an empty string")
            .with_field("Stock Number", D::FreeText, "the dealer stock number for this listing")
            .with_field("Transmission Model", D::FreeText, "the transmission model designation")
            .with_field(
                "U.S. State",
                D::closed_with_rule(US_STATE_NAMES, FieldRule::StateAbbreviation),
                "the US state the truck is located in, fully spelled out",
            )
            .with_field("U.S. State (text)", D::FreeText, "the US state, fully spelled out")
            .with_field("Vehicle model - new", D::best_effort(VEHICLE_MODELS), "the truck model name")
            .with_field("Vehicle Price", D::Number, "the asking price as a number")
            .with_field("Vehicle Year", D::Number, "the model year")
            .with_field("VehicleVIN", D::FreeText, "the full VIN")
            .with_field("Wheelbase", D::Number, "the wheelbase in inches")
            .with_field("Unique id", D::FreeText, "always empty")
            .with_field("Original info description", D::FreeText, "the full original listing text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.len(), 49);
        assert!(vocab.domain("Stock Number").is_some());
        assert!(vocab.domain("No Such Field").is_none());
    }

    #[test]
    fn test_derived_constants() {
        let vocab = Vocabulary::standard();
        assert_eq!(
            vocab.domain("OS - Vehicle Type"),
            Some(&FieldDomain::DerivedConstant("Semi-tractor truck"))
        );
        assert_eq!(
            vocab.domain("OS - Vehicle Class"),
            Some(&FieldDomain::DerivedConstant("Class 8"))
        );
    }

    #[test]
    fn test_model_catalog_uses_best_effort() {
        let vocab = Vocabulary::standard();
        match vocab.domain("Vehicle model - new") {
            Some(FieldDomain::ClosedEnum { strategy, .. }) => {
                assert_eq!(*strategy, MatchStrategy::BestEffort)
            }
            other => panic!("unexpected domain: {other:?}"),
        }
    }

    #[test]
    fn test_field_hints_align_with_fields() {
        let vocab = Vocabulary::standard();
        let hints = vocab.field_hints();
        assert_eq!(hints.len(), vocab.len());
        assert_eq!(hints[0].name, "Company Address");
        assert!(!hints[0].meaning.is_empty());
    }
}
