use crate::units::catalog::{INCHES_PER_FOOT, LBF_PER_KIP};
use crate::units::types::DisplayUnit;

// Halfway cases round away from zero (f64::round), so 4.5" shows as 5".

/// Inches as a whole number with an inch mark: `40"`
pub fn format_inches(value: f64) -> String {
    format!("{}\"", round_whole(value))
}

/// Feet and whole inches: `3' 4" `
pub fn format_feet_inches(value: f64) -> String {
    let (feet, inches) = split_feet_inches(value);
    format!("{}' {}\" ", feet, inches)
}

/// Feet and whole inches with HTML character references for the marks
pub fn format_feet_inches_codes(value: f64) -> String {
    let (feet, inches) = split_feet_inches(value);
    format!("{}&#39; {}&#34; ", feet, inches)
}

/// Pounds as kips, two decimals, no unit
pub fn format_kips(value: f64) -> String {
    format!("{:.2}", value / LBF_PER_KIP)
}

/// Pound-inches as kip-feet, two decimals, no unit
pub fn format_kip_feet(value: f64) -> String {
    format!("{:.2}", value / LBF_PER_KIP / INCHES_PER_FOOT)
}

/// Pounds per inch as kips per foot, two decimals, no unit
pub fn format_kips_per_foot(value: f64) -> String {
    format!("{:.2}", value / LBF_PER_KIP * INCHES_PER_FOOT)
}

/// Pounds per square inch as ksi: `5.00 ksi`
pub fn format_ksi(value: f64) -> String {
    format!("{:.2} ksi", value / LBF_PER_KIP)
}

pub fn format_value(display: DisplayUnit, value: f64) -> String {
    match display {
        DisplayUnit::Inches => format_inches(value),
        DisplayUnit::FeetInches => format_feet_inches(value),
        DisplayUnit::FeetInchesCodes => format_feet_inches_codes(value),
        DisplayUnit::Kips => format_kips(value),
        DisplayUnit::KipFeet => format_kip_feet(value),
        DisplayUnit::KipsPerFoot => format_kips_per_foot(value),
        DisplayUnit::Ksi => format_ksi(value),
    }
}

fn round_whole(value: f64) -> f64 {
    // Adding 0.0 turns -0 into 0 so "-0\"" never shows
    value.round() + 0.0
}

/// Whole feet (floored) and the rounded inch remainder.
/// A remainder that rounds up to 12" carries into the next foot.
fn split_feet_inches(value: f64) -> (f64, f64) {
    let mut feet = (value / INCHES_PER_FOOT).floor();
    let mut inches = round_whole(value - feet * INCHES_PER_FOOT);
    if inches >= INCHES_PER_FOOT {
        feet += 1.0;
        inches -= INCHES_PER_FOOT;
    }
    (feet + 0.0, inches)
}
