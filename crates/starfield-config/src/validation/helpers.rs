//! Shared range-validation helpers used by all domain validators.

use crate::colors::is_hex_color;
use crate::schema::Tiered;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is rejected.
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Range-check both tiers of an integer value.
pub(crate) fn validate_tiered_range(
    errors: &mut Vec<String>,
    name: &str,
    value: &Tiered<u32>,
    min: u32,
    max: u32,
) {
    validate_range(errors, &format!("{name}.full"), value.full, min, max);
    validate_range(errors, &format!("{name}.reduced"), value.reduced, min, max);
}

/// Range-check both tiers of a float value.
pub(crate) fn validate_tiered_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: &Tiered<f32>,
    min: f32,
    max: f32,
) {
    validate_range_f32(errors, &format!("{name}.full"), value.full, min, max);
    validate_range_f32(errors, &format!("{name}.reduced"), value.reduced, min, max);
}

/// Push an error unless `value` is a `#RRGGBB` / `#RRGGBBAA` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !is_hex_color(value) {
        errors.push(format!("{name} = \"{value}\" is not a #RRGGBB color"));
    }
}
