use crate::units::catalog::bare_number_rule;
use crate::units::detector::{hint_selects_large_unit, is_bare_number, recognize};
use crate::units::error::UnitError;
use crate::units::extractor::{extract, parse_literal};
use crate::units::types::{ParsedQuantity, QuantityKind};

/// Form name reported for unit-less input
pub const BARE_NUMBER: &str = "bare-number";

/// Parse `text` as a quantity of `kind`, reporting which form recognized it.
///
/// Unit-less numbers are scaled by the kind's bare-number rule: a
/// `default_unit` naming the large unit (kips, kip-ft, ...) selects it,
/// anything else leaves the number in canonical units. Length is the
/// exception and assumes feet unless the hint names inches.
pub fn parse_detailed(
    kind: QuantityKind,
    text: &str,
    default_unit: Option<&str>,
) -> Result<ParsedQuantity, UnitError> {
    let (form, value) = if is_bare_number(text) {
        let invalid = || UnitError::InvalidNumber {
            kind,
            input: text.to_string(),
        };
        let literal = parse_literal(text).ok_or_else(invalid)?;

        let rule = bare_number_rule(kind);
        let factor = match default_unit {
            Some(hint) if hint_selects_large_unit(kind, hint) => {
                tracing::debug!(%kind, hint, "scaling bare number by default unit");
                rule.hinted
            }
            _ => rule.unhinted,
        };
        let value = literal * factor;
        if !value.is_finite() {
            return Err(invalid());
        }
        (BARE_NUMBER, value)
    } else {
        let form = recognize(kind, text).ok_or_else(|| UnitError::Unrecognized {
            kind,
            input: text.to_string(),
        })?;
        tracing::debug!(%kind, form = form.name, text, "recognized");
        (form.name, extract(form, text)?)
    };

    Ok(ParsedQuantity {
        kind,
        input: text.to_string(),
        form,
        value,
        canonical_unit: kind.canonical_unit(),
    })
}

/// Parse to canonical units, keeping both failure tiers distinct
pub fn try_parse_quantity(
    kind: QuantityKind,
    text: &str,
    default_unit: Option<&str>,
) -> Result<f64, UnitError> {
    parse_detailed(kind, text, default_unit).map(|parsed| parsed.value)
}

/// Parse to canonical units; any failure yields NaN
pub fn parse_quantity(kind: QuantityKind, text: &str, default_unit: Option<&str>) -> f64 {
    match try_parse_quantity(kind, text, default_unit) {
        Ok(value) => value,
        Err(e) => {
            if e.is_internal() {
                tracing::error!("{}", e);
            }
            f64::NAN
        }
    }
}

/// Length in inches
pub fn parse_length(text: &str, default_unit: Option<&str>) -> f64 {
    parse_quantity(QuantityKind::Length, text, default_unit)
}

/// Force in pounds
pub fn parse_force(text: &str, default_unit: Option<&str>) -> f64 {
    parse_quantity(QuantityKind::Force, text, default_unit)
}

/// Moment in pound-inches
pub fn parse_moment(text: &str, default_unit: Option<&str>) -> f64 {
    parse_quantity(QuantityKind::Moment, text, default_unit)
}

/// Line load in pounds per inch
pub fn parse_force_per_length(text: &str, default_unit: Option<&str>) -> f64 {
    parse_quantity(QuantityKind::ForcePerLength, text, default_unit)
}

/// Pressure in pounds per square inch
pub fn parse_force_per_area(text: &str, default_unit: Option<&str>) -> f64 {
    parse_quantity(QuantityKind::ForcePerArea, text, default_unit)
}
