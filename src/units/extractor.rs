use crate::units::catalog::{Conversion, UnitForm, INCH, INCHES_PER_FOOT};
use crate::units::error::UnitError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INCH_SPLIT: Regex = Regex::new(INCH).unwrap();
}

/// Pull the numeric literal(s) out of a string the form already recognized
/// and convert them to the kind's canonical unit.
pub fn extract(form: &UnitForm, text: &str) -> Result<f64, UnitError> {
    let value = match form.conversion {
        Conversion::Scale {
            multiplier,
            divisor,
        } => parse_literal(leading_token(&form.splitter, text)).map(|v| v * multiplier / divisor),
        Conversion::InchFraction => inch_fraction(text),
        Conversion::FeetInches => feet_inches(&form.splitter, text),
        Conversion::FeetInchesFraction => feet_inches_fraction(&form.splitter, text),
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| UnitError::Extraction {
            kind: form.kind,
            form: form.name,
            input: text.to_string(),
        })
}

/// Parse a numeric literal. An empty literal counts as zero, so "in" alone is 0".
pub fn parse_literal(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return Some(0.0);
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Everything before the splitter's first match, or the whole string
fn leading_token<'a>(splitter: &Regex, s: &'a str) -> &'a str {
    splitter.find(s).map_or(s, |m| &s[..m.start()])
}

/// Split at the splitter's first match, dropping the unit token
fn split_at_unit<'a>(splitter: &Regex, s: &'a str) -> Option<(&'a str, &'a str)> {
    splitter.find(s).map(|m| (&s[..m.start()], &s[m.end()..]))
}

/// `a/b` with an optional inches token
pub fn inch_fraction(s: &str) -> Option<f64> {
    let (numerator, denominator) = leading_token(&INCH_SPLIT, s).split_once('/')?;
    let numerator = parse_literal(numerator)?;
    let denominator = parse_literal(denominator)?;
    Some(numerator / denominator)
}

fn feet_inches(feet_split: &Regex, s: &str) -> Option<f64> {
    let (feet, rest) = split_at_unit(feet_split, s)?;
    let feet = parse_literal(feet)?;
    // The inches mark is optional: "3' 4" is 40"
    let inches = parse_literal(leading_token(&INCH_SPLIT, rest))?;
    Some(feet * INCHES_PER_FOOT + inches)
}

fn feet_inches_fraction(feet_split: &Regex, s: &str) -> Option<f64> {
    let (feet, rest) = split_at_unit(feet_split, s)?;
    let feet = parse_literal(feet)?;

    let tokens: Vec<&str> = leading_token(&INCH_SPLIT, rest).split_whitespace().collect();
    let (inches, fraction) = match tokens.as_slice() {
        [fraction] => (0.0, inch_fraction(fraction)?),
        [inches, fraction] => (parse_literal(inches)?, inch_fraction(fraction)?),
        _ => return None,
    };

    Some(feet * INCHES_PER_FOOT + inches + fraction)
}
