// WebAssembly bindings for browser front ends
use crate::units::{self, QuantityKind};
use wasm_bindgen::prelude::*;

/// Length in inches, NaN when the text is not a length
#[wasm_bindgen(js_name = parseLength)]
pub fn parse_length(text: &str, default_unit: Option<String>) -> f64 {
    units::parse_length(text, default_unit.as_deref())
}

/// Force in pounds, NaN when the text is not a force
#[wasm_bindgen(js_name = parseForce)]
pub fn parse_force(text: &str, default_unit: Option<String>) -> f64 {
    units::parse_force(text, default_unit.as_deref())
}

#[wasm_bindgen(js_name = parseMoment)]
pub fn parse_moment(text: &str, default_unit: Option<String>) -> f64 {
    units::parse_moment(text, default_unit.as_deref())
}

#[wasm_bindgen(js_name = parseForcePerLength)]
pub fn parse_force_per_length(text: &str, default_unit: Option<String>) -> f64 {
    units::parse_force_per_length(text, default_unit.as_deref())
}

#[wasm_bindgen(js_name = parseForcePerArea)]
pub fn parse_force_per_area(text: &str, default_unit: Option<String>) -> f64 {
    units::parse_force_per_area(text, default_unit.as_deref())
}

/// Parse with errors surfaced as thrown JavaScript `Error`s.
/// `kind` is one of "length", "force", "moment", "force_per_length", "force_per_area".
#[wasm_bindgen(js_name = tryParseQuantity)]
pub fn try_parse_quantity(
    kind: &str,
    text: &str,
    default_unit: Option<String>,
) -> Result<f64, JsValue> {
    let kind: QuantityKind = kind
        .parse()
        .map_err(|e: String| JsValue::from(js_sys::Error::new(&e)))?;

    units::try_parse_quantity(kind, text, default_unit.as_deref())
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
}

#[wasm_bindgen(js_name = formatInches)]
pub fn format_inches(value: f64) -> String {
    units::format_inches(value)
}

#[wasm_bindgen(js_name = formatFeetInches)]
pub fn format_feet_inches(value: f64) -> String {
    units::format_feet_inches(value)
}

#[wasm_bindgen(js_name = formatFeetInchesCodes)]
pub fn format_feet_inches_codes(value: f64) -> String {
    units::format_feet_inches_codes(value)
}

#[wasm_bindgen(js_name = formatKips)]
pub fn format_kips(value: f64) -> String {
    units::format_kips(value)
}

#[wasm_bindgen(js_name = formatKipFeet)]
pub fn format_kip_feet(value: f64) -> String {
    units::format_kip_feet(value)
}

#[wasm_bindgen(js_name = formatKipsPerFoot)]
pub fn format_kips_per_foot(value: f64) -> String {
    units::format_kips_per_foot(value)
}

#[wasm_bindgen(js_name = formatKsi)]
pub fn format_ksi(value: f64) -> String {
    units::format_ksi(value)
}
