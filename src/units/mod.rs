// Recognition and conversion of engineering unit expressions.
// Every kind parses to one canonical unit: inches, lb, lb-in, lb/in, lb/in^2.

pub mod catalog;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::{catalog, find_form, Conversion, UnitForm};
pub use detector::{is_bare_number, matches_form, matching_forms, recognize};
pub use error::UnitError;
pub use formatter::{
    format_feet_inches, format_feet_inches_codes, format_inches, format_kip_feet, format_kips,
    format_kips_per_foot, format_ksi, format_value,
};
pub use parser::{
    parse_detailed, parse_force, parse_force_per_area, parse_force_per_length, parse_length,
    parse_moment, parse_quantity, try_parse_quantity,
};
pub use processor::UnitProcessor;
pub use types::{DisplayUnit, ParsedQuantity, QuantityKind};
