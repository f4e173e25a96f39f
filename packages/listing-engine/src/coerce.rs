//! Value coercion: one raw scalar in, one canonical value out.
//!
//! Coercion is total. Unparseable numbers, unknown enum inputs, and
//! malformed yes/no answers all degrade to the empty value so that one
//! bad field never aborts a batch.

use strsim::normalized_levenshtein;

use crate::types::value::FieldValue;
use crate::vocabulary::{options, FieldDomain, FieldRule, MatchStrategy};

/// Minimum similarity a candidate must clear under
/// [`MatchStrategy::Threshold`].
pub const MATCH_CUTOFF: f64 = 0.6;

/// Coerce a raw oracle scalar into the canonical value for `domain`.
///
/// `None` means the field was absent or null; only derived constants
/// produce a non-empty value from that.
pub fn coerce(raw: Option<&str>, domain: &FieldDomain) -> FieldValue {
    if let FieldDomain::DerivedConstant(constant) = domain {
        return FieldValue::text(*constant);
    }

    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return FieldValue::empty(),
    };

    match domain {
        FieldDomain::Number => coerce_number(value),
        FieldDomain::FreeText => FieldValue::text(value),
        FieldDomain::YesNo => coerce_yes_no(value),
        FieldDomain::ClosedEnum {
            options,
            strategy,
            rule,
        } => coerce_enum(value, options, *strategy, *rule),
        FieldDomain::DerivedConstant(_) => unreachable!("handled above"),
    }
}

/// Numeric coercion: keep digits and dots, parse int when no dot is
/// present, float otherwise. `"$45,000.00"` becomes `45000.0`.
pub fn coerce_number(raw: &str) -> FieldValue {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return FieldValue::empty();
    }
    if cleaned.contains('.') {
        cleaned
            .parse::<f64>()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::empty())
    } else {
        cleaned
            .parse::<i64>()
            .map(FieldValue::Int)
            .unwrap_or_else(|_| FieldValue::empty())
    }
}

fn coerce_yes_no(raw: &str) -> FieldValue {
    match raw.to_lowercase().as_str() {
        "yes" => FieldValue::text("yes"),
        "no" => FieldValue::text("no"),
        _ => FieldValue::empty(),
    }
}

fn coerce_enum(
    value: &str,
    options: &[&str],
    strategy: MatchStrategy,
    rule: Option<FieldRule>,
) -> FieldValue {
    if let Some(rule) = rule {
        if let Some(direct) = apply_pre_rule(rule, value, options) {
            return FieldValue::Text(direct);
        }
    }

    let matched = match strategy {
        MatchStrategy::BestEffort => best_effort_match(value, options),
        MatchStrategy::Threshold => threshold_match(value, options),
    };

    let adjusted = match rule {
        Some(rule) => apply_post_rule(rule, value, matched),
        None => matched,
    };
    FieldValue::Text(adjusted)
}

/// Rules that bypass the matcher entirely when they recognize the input.
fn apply_pre_rule(rule: FieldRule, value: &str, enum_options: &[&str]) -> Option<String> {
    match rule {
        FieldRule::StateAbbreviation => {
            let code = value.trim().to_uppercase();
            options::US_STATES
                .iter()
                .find(|(abbr, _)| *abbr == code)
                .map(|(_, name)| name.to_string())
        }
        FieldRule::NumericSpeeds => {
            let digits = value.trim();
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let speed = format!("{digits}-speed");
            enum_options.contains(&speed.as_str()).then_some(speed)
        }
        FieldRule::AxleShorthand => match value.trim().to_lowercase().as_str() {
            "tandem" | "tandem axle" => Some("6 x 4".to_string()),
            "single" | "single axle" => Some("4 x 2".to_string()),
            _ => None,
        },
        FieldRule::ConditionPreOwned | FieldRule::EatonFuller => None,
    }
}

/// Rules that adjust the matcher's answer.
fn apply_post_rule(rule: FieldRule, raw: &str, matched: String) -> String {
    match rule {
        FieldRule::ConditionPreOwned if matched == "Used" => "Pre-Owned".to_string(),
        FieldRule::EatonFuller if raw.trim().eq_ignore_ascii_case("eaton") => {
            "Eaton Fuller".to_string()
        }
        _ => matched,
    }
}

/// Best-effort matching: the highest-scoring option wins regardless of
/// how weak the match is. Non-empty option lists always yield an answer.
pub fn best_effort_match(value: &str, options: &[&str]) -> String {
    let needle = value.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for option in options {
        let score = normalized_levenshtein(&needle, &option.to_lowercase());
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((option, score));
        }
    }
    best.map(|(option, _)| option.to_string()).unwrap_or_default()
}

/// Threshold-gated matching: the best option that clears
/// [`MATCH_CUTOFF`], or the empty string when nothing does.
pub fn threshold_match(value: &str, options: &[&str]) -> String {
    let needle = value.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for option in options {
        let score = normalized_levenshtein(&needle, &option.to_lowercase());
        if score >= MATCH_CUTOFF && best.map_or(true, |(_, top)| score > top) {
            best = Some((option, score));
        }
    }
    best.map(|(option, _)| option.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::options::{
        AXLE_CONFIGURATIONS, TRANSMISSION_MAKES, TRANSMISSION_SPEEDS, US_STATE_NAMES,
        VEHICLE_CONDITIONS, VEHICLE_MODELS,
    };
    use proptest::prelude::*;

    #[test]
    fn test_number_strips_currency_noise() {
        assert_eq!(coerce_number("$45,000.00"), FieldValue::Float(45000.0));
        assert_eq!(coerce_number("512345"), FieldValue::Int(512345));
        assert_eq!(coerce_number("  780 hp "), FieldValue::Int(780));
        assert_eq!(coerce_number("n/a"), FieldValue::empty());
        assert_eq!(coerce_number("1.2.3"), FieldValue::empty());
    }

    #[test]
    fn test_yes_no_is_strict() {
        let domain = FieldDomain::YesNo;
        assert_eq!(coerce(Some("YES"), &domain), FieldValue::text("yes"));
        assert_eq!(coerce(Some("No"), &domain), FieldValue::text("no"));
        assert_eq!(coerce(Some("yep"), &domain), FieldValue::empty());
        assert_eq!(coerce(Some("true"), &domain), FieldValue::empty());
        assert_eq!(coerce(None, &domain), FieldValue::empty());
    }

    #[test]
    fn test_free_text_trims() {
        let domain = FieldDomain::FreeText;
        assert_eq!(coerce(Some("  DD15  "), &domain), FieldValue::text("DD15"));
        assert_eq!(coerce(Some("   "), &domain), FieldValue::empty());
    }

    #[test]
    fn test_derived_constant_ignores_input() {
        let domain = FieldDomain::DerivedConstant("Class 8");
        assert_eq!(coerce(Some("Class 7"), &domain), FieldValue::text("Class 8"));
        assert_eq!(coerce(None, &domain), FieldValue::text("Class 8"));
    }

    #[test]
    fn test_threshold_match_rejects_weak_candidates() {
        assert_eq!(threshold_match("6 x 4", AXLE_CONFIGURATIONS), "6 x 4");
        assert_eq!(threshold_match("6x4", AXLE_CONFIGURATIONS), "6 x 4");
        assert_eq!(threshold_match("articulated bus", AXLE_CONFIGURATIONS), "");
    }

    #[test]
    fn test_best_effort_always_answers() {
        assert_eq!(best_effort_match("anything at all", &[]), "");
        assert!(!best_effort_match("zzzz", VEHICLE_MODELS).is_empty());
        assert_eq!(best_effort_match("cascadia 126", VEHICLE_MODELS), "Cascadia 126");
    }

    #[test]
    fn test_eaton_expands_to_eaton_fuller() {
        let domain =
            FieldDomain::closed_with_rule(TRANSMISSION_MAKES, FieldRule::EatonFuller);
        assert_eq!(coerce(Some("eaton"), &domain), FieldValue::text("Eaton Fuller"));
        assert_eq!(coerce(Some("Allison"), &domain), FieldValue::text("Allison"));
    }

    #[test]
    fn test_state_abbreviation_maps_before_fuzzy() {
        let domain =
            FieldDomain::closed_with_rule(US_STATE_NAMES, FieldRule::StateAbbreviation);
        assert_eq!(coerce(Some("TX"), &domain), FieldValue::text("Texas"));
        assert_eq!(coerce(Some("tx"), &domain), FieldValue::text("Texas"));
        // Already-canonical input is idempotent.
        assert_eq!(coerce(Some("Texas"), &domain), FieldValue::text("Texas"));
        assert_eq!(coerce(Some("Narnia"), &domain), FieldValue::empty());
    }

    #[test]
    fn test_numeric_speeds_skip_fuzzy_matching() {
        let domain =
            FieldDomain::closed_with_rule(TRANSMISSION_SPEEDS, FieldRule::NumericSpeeds);
        assert_eq!(coerce(Some("10"), &domain), FieldValue::text("10-speed"));
        assert_eq!(coerce(Some("18"), &domain), FieldValue::text("18-speed"));
        assert_eq!(coerce(Some("13 speed"), &domain), FieldValue::text("13-speed"));
        // "11-speed" is not in the catalog, so bare "11" falls through.
        assert_eq!(coerce(Some("11"), &domain), FieldValue::empty());
    }

    #[test]
    fn test_used_becomes_pre_owned() {
        let domain =
            FieldDomain::closed_with_rule(VEHICLE_CONDITIONS, FieldRule::ConditionPreOwned);
        assert_eq!(coerce(Some("used"), &domain), FieldValue::text("Pre-Owned"));
        assert_eq!(coerce(Some("New"), &domain), FieldValue::text("New"));
    }

    #[test]
    fn test_axle_shorthand() {
        let domain =
            FieldDomain::closed_with_rule(AXLE_CONFIGURATIONS, FieldRule::AxleShorthand);
        assert_eq!(coerce(Some("tandem"), &domain), FieldValue::text("6 x 4"));
        assert_eq!(coerce(Some("TANDEM AXLE"), &domain), FieldValue::text("6 x 4"));
        assert_eq!(coerce(Some("single"), &domain), FieldValue::text("4 x 2"));
        assert_eq!(coerce(Some("8 x 4"), &domain), FieldValue::text("8 x 4"));
    }

    #[test]
    fn test_numeric_enum_over_stringified_options() {
        let domain = FieldDomain::closed(crate::vocabulary::options::REAR_AXLE_COUNTS);
        assert_eq!(coerce(Some("2"), &domain), FieldValue::text("2"));
        assert_eq!(coerce(Some("many"), &domain), FieldValue::empty());
    }

    proptest! {
        #[test]
        fn prop_number_coercion_is_total(raw in ".*") {
            // Never panics, always yields a value.
            let _ = coerce_number(&raw);
        }

        #[test]
        fn prop_threshold_match_returns_an_option_or_empty(raw in ".*") {
            let matched = threshold_match(&raw, AXLE_CONFIGURATIONS);
            prop_assert!(matched.is_empty() || AXLE_CONFIGURATIONS.contains(&matched.as_str()));
        }
    }
}
