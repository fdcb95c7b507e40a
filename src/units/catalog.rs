// Pattern catalog: per quantity kind, the ordered list of recognized notations.
// Each form carries a whole-string recognizer and a splitter that cuts an
// already-recognized string at its unit token.

use crate::units::types::QuantityKind;
use lazy_static::lazy_static;
use regex::Regex;

pub const INCHES_PER_FOOT: f64 = 12.0;
pub const INCHES_PER_METER: f64 = 39.370078;
pub const INCHES_PER_CENTIMETER: f64 = 0.39370078;
pub const INCHES_PER_MILLIMETER: f64 = 0.039370078;
pub const LBF_PER_KIP: f64 = 1000.0;
pub const LBF_PER_TON: f64 = 2000.0;
pub const LBF_PER_NEWTON: f64 = 0.224808943;
pub const LBF_PER_KILONEWTON: f64 = 224.808943;

// Unit token alternations, case-sensitive
pub(crate) const INCH: &str = r#"("|in|inch|inches)"#;
const FOOT_MARK: &str = r"('|ft|feet)";
const FOOT: &str = r"(ft|feet|foot)";
const INCH_WORD: &str = r"(in|inch|inches)";
const METER: &str = r"(m|meter|meters)";
const CENTIMETER: &str = r"(cm|centimeter|centimeters)";
const MILLIMETER: &str = r"(mm|millimeter|millimeters)";
const SQUARE_INCH: &str = r"(in\^2|inch\^2|in²|inch²)";
const POUND: &str = r"(lb|lbs|pound|pounds)";
const KIP: &str = r"(k|kip|kips)";
const TON: &str = r"(ton|tons)";
const NEWTON: &str = r"(n|newton|newtons)";
const KILONEWTON: &str = r"(kn|kns|killonewton|killonewtons|kilonewton|kilonewtons)";
// Between the force and length tokens of a moment: "kip-ft", "kip.ft", "kip ft", "kipft"
const MOMENT_SEP: &str = r"(-|\.|\s)?";
const PER: &str = r"\s?/\s?";

// Optional sign, digits, optional decimal part. Digits may be absent.
const LITERAL: &str = r"-?[0-9]*(\.[0-9]*)?";
// Leading whole feet of a compound length. A sign needs digits after it.
const FEET_LITERAL: &str = r"(-[0-9]+|[0-9]*)";

/// How a form's numeric literal(s) map to the canonical unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// `literal * multiplier / divisor`
    Scale { multiplier: f64, divisor: f64 },
    /// `a/b` inches
    InchFraction,
    /// feet * 12 + inches
    FeetInches,
    /// feet * 12 + inches + a/b
    FeetInchesFraction,
}

impl Conversion {
    const fn times(multiplier: f64) -> Self {
        Conversion::Scale {
            multiplier,
            divisor: 1.0,
        }
    }

    const fn ratio(multiplier: f64, divisor: f64) -> Self {
        Conversion::Scale {
            multiplier,
            divisor,
        }
    }
}

/// One recognized notation of a quantity kind
#[derive(Debug)]
pub struct UnitForm {
    pub kind: QuantityKind,
    pub name: &'static str,
    /// Anchored whole-string pattern
    pub recognizer: Regex,
    /// Unanchored unit-token pattern; the literal is everything before its first match
    pub splitter: Regex,
    pub conversion: Conversion,
}

impl UnitForm {
    /// `<literal> <unit>` with surrounding whitespace
    fn simple(
        kind: QuantityKind,
        name: &'static str,
        unit: &str,
        conversion: Conversion,
    ) -> Self {
        Self::new(
            kind,
            name,
            &format!(r"{}\s?{}", LITERAL, unit),
            unit,
            conversion,
        )
    }

    fn new(
        kind: QuantityKind,
        name: &'static str,
        body: &str,
        split: &str,
        conversion: Conversion,
    ) -> Self {
        Self {
            kind,
            name,
            recognizer: anchored(body),
            splitter: Regex::new(split).unwrap(),
            conversion,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.recognizer.is_match(text)
    }
}

fn anchored(body: &str) -> Regex {
    Regex::new(&format!(r"^\s*{}\s*$", body)).unwrap()
}

/// Rule for unit-less input: scale by `hinted` when the default-unit hint
/// names the kind's large unit, by `unhinted` otherwise.
#[derive(Debug)]
pub struct BareNumberRule {
    pub hint: Regex,
    pub hinted: f64,
    pub unhinted: f64,
}

lazy_static! {
    static ref LENGTH_FORMS: Vec<UnitForm> = {
        use QuantityKind::Length;
        vec![
            UnitForm::simple(Length, "inches", INCH, Conversion::times(1.0)),
            UnitForm::new(
                Length,
                "inch-fraction",
                &format!(r"-?[0-9]*/[0-9]*\s?{}", INCH),
                INCH,
                Conversion::InchFraction,
            ),
            UnitForm::simple(Length, "feet", FOOT_MARK, Conversion::times(INCHES_PER_FOOT)),
            // Inches digits are required so a lone "3'" stays with the feet form.
            // Signed feet are floored: "-1' 7\"" is -12 + 7 = -5".
            UnitForm::new(
                Length,
                "feet-inches",
                &format!(
                    r"{}\s?{}\s*[0-9]+(\s*|\s?{}\s*)",
                    FEET_LITERAL, FOOT_MARK, INCH
                ),
                FOOT_MARK,
                Conversion::FeetInches,
            ),
            UnitForm::new(
                Length,
                "feet-inches-fraction",
                &format!(
                    r"{}\s?{}\s*[0-9]*\s?[0-9]*/[0-9]*\s?{}",
                    FEET_LITERAL, FOOT_MARK, INCH
                ),
                FOOT_MARK,
                Conversion::FeetInchesFraction,
            ),
            UnitForm::simple(Length, "meters", METER, Conversion::times(INCHES_PER_METER)),
            UnitForm::simple(
                Length,
                "centimeters",
                CENTIMETER,
                Conversion::times(INCHES_PER_CENTIMETER),
            ),
            UnitForm::simple(
                Length,
                "millimeters",
                MILLIMETER,
                Conversion::times(INCHES_PER_MILLIMETER),
            ),
        ]
    };

    static ref FORCE_FORMS: Vec<UnitForm> = {
        use QuantityKind::Force;
        vec![
            UnitForm::simple(Force, "lbs", POUND, Conversion::times(1.0)),
            UnitForm::simple(Force, "kips", KIP, Conversion::times(LBF_PER_KIP)),
            UnitForm::simple(Force, "tons", TON, Conversion::times(LBF_PER_TON)),
            UnitForm::simple(Force, "newtons", NEWTON, Conversion::times(LBF_PER_NEWTON)),
            UnitForm::simple(
                Force,
                "kilonewtons",
                KILONEWTON,
                Conversion::times(LBF_PER_KILONEWTON),
            ),
        ]
    };

    static ref MOMENT_FORMS: Vec<UnitForm> = {
        use QuantityKind::Moment;
        let moment = |name: &'static str, force: &str, length: &str, conversion: Conversion| {
            UnitForm::simple(Moment, name, &format!("{}{}{}", force, MOMENT_SEP, length), conversion)
        };
        vec![
            moment("lb-in", POUND, INCH_WORD, Conversion::times(1.0)),
            moment("lb-ft", POUND, FOOT, Conversion::times(INCHES_PER_FOOT)),
            moment("kip-in", KIP, INCH_WORD, Conversion::times(LBF_PER_KIP)),
            moment(
                "kip-ft",
                KIP,
                FOOT,
                Conversion::times(LBF_PER_KIP * INCHES_PER_FOOT),
            ),
            moment(
                "n-m",
                NEWTON,
                METER,
                Conversion::times(INCHES_PER_METER * LBF_PER_NEWTON),
            ),
            moment(
                "kn-m",
                KILONEWTON,
                METER,
                Conversion::times(1000.0 * INCHES_PER_METER * LBF_PER_NEWTON),
            ),
        ]
    };

    static ref FORCE_PER_LENGTH_FORMS: Vec<UnitForm> = {
        use QuantityKind::ForcePerLength;
        let per = |name: &'static str, force: &str, length: &str, conversion: Conversion| {
            UnitForm::simple(ForcePerLength, name, &format!("{}{}{}", force, PER, length), conversion)
        };
        vec![
            per("lb/in", POUND, INCH_WORD, Conversion::times(1.0)),
            per("lb/ft", POUND, FOOT, Conversion::ratio(1.0, INCHES_PER_FOOT)),
            per("kip/in", KIP, INCH_WORD, Conversion::times(LBF_PER_KIP)),
            per("kip/ft", KIP, FOOT, Conversion::ratio(LBF_PER_KIP, INCHES_PER_FOOT)),
            per(
                "n/m",
                NEWTON,
                METER,
                Conversion::ratio(INCHES_PER_METER, LBF_PER_NEWTON),
            ),
            per(
                "kn/m",
                KILONEWTON,
                METER,
                Conversion::ratio(1000.0 * INCHES_PER_METER, LBF_PER_NEWTON),
            ),
        ]
    };

    static ref FORCE_PER_AREA_FORMS: Vec<UnitForm> = {
        use QuantityKind::ForcePerArea;
        vec![
            UnitForm::simple(
                ForcePerArea,
                "lb/in^2",
                &format!("{}{}{}", POUND, PER, SQUARE_INCH),
                Conversion::times(1.0),
            ),
            UnitForm::simple(
                ForcePerArea,
                "kip/in^2",
                &format!("{}{}{}", KIP, PER, SQUARE_INCH),
                Conversion::times(LBF_PER_KIP),
            ),
            UnitForm::simple(ForcePerArea, "ksi", "(ksi)", Conversion::times(LBF_PER_KIP)),
        ]
    };

    static ref LENGTH_BARE: BareNumberRule = BareNumberRule {
        hint: anchored(INCH),
        hinted: 1.0,
        unhinted: INCHES_PER_FOOT,
    };

    static ref FORCE_BARE: BareNumberRule = BareNumberRule {
        hint: anchored(KIP),
        hinted: LBF_PER_KIP,
        unhinted: 1.0,
    };

    static ref MOMENT_BARE: BareNumberRule = BareNumberRule {
        hint: anchored(&format!("{}{}{}", KIP, MOMENT_SEP, FOOT)),
        hinted: LBF_PER_KIP * INCHES_PER_FOOT,
        unhinted: 1.0,
    };

    static ref FORCE_PER_LENGTH_BARE: BareNumberRule = BareNumberRule {
        hint: anchored(&format!("{}{}{}", KIP, PER, FOOT)),
        hinted: LBF_PER_KIP / INCHES_PER_FOOT,
        unhinted: 1.0,
    };

    static ref FORCE_PER_AREA_BARE: BareNumberRule = BareNumberRule {
        hint: anchored(&format!("({}{}{}|ksi)", KIP, PER, SQUARE_INCH)),
        hinted: LBF_PER_KIP,
        unhinted: 1.0,
    };
}

/// Forms of a kind in the order they are tried
pub fn catalog(kind: QuantityKind) -> &'static [UnitForm] {
    match kind {
        QuantityKind::Length => LENGTH_FORMS.as_slice(),
        QuantityKind::Force => FORCE_FORMS.as_slice(),
        QuantityKind::Moment => MOMENT_FORMS.as_slice(),
        QuantityKind::ForcePerLength => FORCE_PER_LENGTH_FORMS.as_slice(),
        QuantityKind::ForcePerArea => FORCE_PER_AREA_FORMS.as_slice(),
    }
}

pub fn bare_number_rule(kind: QuantityKind) -> &'static BareNumberRule {
    match kind {
        QuantityKind::Length => &*LENGTH_BARE,
        QuantityKind::Force => &*FORCE_BARE,
        QuantityKind::Moment => &*MOMENT_BARE,
        QuantityKind::ForcePerLength => &*FORCE_PER_LENGTH_BARE,
        QuantityKind::ForcePerArea => &*FORCE_PER_AREA_BARE,
    }
}

/// Look up a form by name
pub fn find_form(kind: QuantityKind, name: &str) -> Option<&'static UnitForm> {
    catalog(kind).iter().find(|form| form.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_names_are_unique() {
        for kind in QuantityKind::ALL {
            let forms = catalog(kind);
            for (i, form) in forms.iter().enumerate() {
                assert_eq!(form.kind, kind);
                assert!(
                    forms[i + 1..].iter().all(|other| other.name != form.name),
                    "duplicate form name {}",
                    form.name
                );
            }
        }
    }

    #[test]
    fn test_recognizers_are_anchored() {
        let inches = find_form(QuantityKind::Length, "inches").unwrap();
        assert!(inches.matches("3 in"));
        assert!(!inches.matches("3 in no good"));
        assert!(!inches.matches("inches3inches"));

        let newtons = find_form(QuantityKind::Force, "newtons").unwrap();
        assert!(newtons.matches("10 n"));
        assert!(!newtons.matches("10 kn"));
        assert!(!newtons.matches("10 ton"));
    }

    #[test]
    fn test_units_are_case_sensitive() {
        let meters = find_form(QuantityKind::Length, "meters").unwrap();
        assert!(meters.matches("1.2 m"));
        assert!(!meters.matches("1.2 M"));
    }

    #[test]
    fn test_bare_number_hints() {
        assert!(bare_number_rule(QuantityKind::Length).hint.is_match("in"));
        assert!(bare_number_rule(QuantityKind::Force).hint.is_match("kips"));
        assert!(!bare_number_rule(QuantityKind::Force).hint.is_match("kn"));
        assert!(bare_number_rule(QuantityKind::Moment).hint.is_match("kip-ft"));
        assert!(bare_number_rule(QuantityKind::ForcePerLength)
            .hint
            .is_match("kip/ft"));
        assert!(bare_number_rule(QuantityKind::ForcePerArea).hint.is_match("ksi"));
        assert!(bare_number_rule(QuantityKind::ForcePerArea)
            .hint
            .is_match("k/in^2"));
    }
}
