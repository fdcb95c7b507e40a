use crate::units::catalog::{bare_number_rule, catalog, find_form, UnitForm};
use crate::units::types::QuantityKind;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Unit-less integer: "42", "-42", "  42 "
    static ref INTEGER_PATTERN: Regex = Regex::new(r"^\s*-?[0-9]*\s*$").unwrap();
    /// Unit-less decimal: "42.0", "-.5", "3."
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^\s*-?[0-9]*(\.[0-9]*)?\s*$").unwrap();
}

/// Check if a string is a number with no unit token
pub fn is_bare_number(s: &str) -> bool {
    INTEGER_PATTERN.is_match(s) || DECIMAL_PATTERN.is_match(s)
}

/// First form of the kind's catalog whose recognizer accepts `text`
pub fn recognize(kind: QuantityKind, text: &str) -> Option<&'static UnitForm> {
    catalog(kind).iter().find(|form| form.matches(text))
}

/// Every form of the kind whose recognizer accepts `text`, in catalog order
pub fn matching_forms(kind: QuantityKind, text: &str) -> Vec<&'static UnitForm> {
    catalog(kind)
        .iter()
        .filter(|form| form.matches(text))
        .collect()
}

/// Check a string against one named form, ignoring catalog order.
/// Unknown form names never match.
pub fn matches_form(kind: QuantityKind, form_name: &str, text: &str) -> bool {
    find_form(kind, form_name).is_some_and(|form| form.matches(text))
}

/// True when a default-unit hint names the kind's large unit
/// (inches for length, kips, kip-ft, kip/ft, ksi)
pub fn hint_selects_large_unit(kind: QuantityKind, hint: &str) -> bool {
    bare_number_rule(kind).hint.is_match(hint)
}
