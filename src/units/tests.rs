use super::*;
use proptest::prelude::*;

fn assert_close(actual: f64, expected: f64, input: &str) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "{}: expected {}, got {}",
        input,
        expected,
        actual
    );
}

#[test]
fn test_parse_length_cases() {
    let cases = [
        ("-3feet", -36.0),
        ("3 feet", 36.0),
        ("3'", 36.0),
        ("3 '", 36.0),
        ("1/3\"", 1.0 / 3.0),
        ("1/3 \"", 1.0 / 3.0),
        ("3 ft 3 in", 39.0),
        ("3ft 3in", 39.0),
        ("3' 3 1/2\"", 39.5),
        ("3ft 3 1/2in", 39.5),
        ("1.2m", 47.244),
        ("1.2 m", 47.244),
        ("1200cm", 472.44),
        ("1200 cm", 472.44),
        ("1200mm", 47.244),
        ("1200 mm", 47.244),
        ("2 meters", 78.740156),
        ("-3.2\"", -3.2),
        ("4.4 inches", 4.4),
        ("-1' 7\"", -5.0),
        ("-2' 6 1/2\"", -17.5),
    ];
    for (input, expected) in cases {
        assert_close(parse_length(input, None), expected, input);
    }
}

#[test]
fn test_parse_force_cases() {
    let cases = [
        ("2 kips", 2000.0),
        ("2k", 2000.0),
        ("1 ton", 2000.0),
        ("3 tons", 6000.0),
        ("10 n", 2.248),
        ("10 newtons", 2.248),
        ("1 kn", 224.808943),
        ("1 killonewton", 224.808943),
        ("2 kns", 449.617886),
        ("150 lbs", 150.0),
        ("1.5 pounds", 1.5),
    ];
    for (input, expected) in cases {
        assert_close(parse_force(input, None), expected, input);
    }
}

#[test]
fn test_parse_moment_cases() {
    let cases = [
        ("1 kip-ft", 12000.0),
        ("1 kip.ft", 12000.0),
        ("1 kipft", 12000.0),
        ("1 kip ft", 12000.0),
        ("2 k-in", 2000.0),
        ("5 lb-in", 5.0),
        ("5 lbs-ft", 60.0),
        ("1 n-m", 8.850746),
        ("1 kn-m", 8850.746),
    ];
    for (input, expected) in cases {
        assert_close(parse_moment(input, None), expected, input);
    }
}

#[test]
fn test_parse_force_per_length_cases() {
    let cases = [
        ("12 lb/ft", 1.0),
        ("3 lb/in", 3.0),
        ("1.2 kip/ft", 100.0),
        ("1 k / in", 1000.0),
        ("1 n/m", 39.370078 / 0.224808943),
        ("1 kn/m", 1000.0 * 39.370078 / 0.224808943),
    ];
    for (input, expected) in cases {
        assert_close(parse_force_per_length(input, None), expected, input);
    }
}

#[test]
fn test_parse_force_per_area_cases() {
    let cases = [
        ("1 ksi", 1000.0),
        ("36ksi", 36000.0),
        ("50 lb/in^2", 50.0),
        ("50 lbs/in²", 50.0),
        ("2 kip/in^2", 2000.0),
    ];
    for (input, expected) in cases {
        assert_close(parse_force_per_area(input, None), expected, input);
    }
}

#[test]
fn test_malformed_input_is_nan_everywhere() {
    let parsers: [fn(&str, Option<&str>) -> f64; 5] = [
        parse_length,
        parse_force,
        parse_moment,
        parse_force_per_length,
        parse_force_per_area,
    ];
    for input in ["3' 3'", "3\"\"", "abc", "3 \" no good", "1 2 3", "3 M"] {
        for parse in parsers {
            assert!(parse(input, None).is_nan(), "{} should not parse", input);
        }
    }
}

#[test]
fn test_recognizers_are_exclusive() {
    let samples = [
        (QuantityKind::Length, "3 in"),
        (QuantityKind::Length, "1/4\""),
        (QuantityKind::Length, "3'"),
        (QuantityKind::Length, "3 ft 3 in"),
        (QuantityKind::Length, "3' 3 1/2\""),
        (QuantityKind::Length, "1.2m"),
        (QuantityKind::Length, "12 cm"),
        (QuantityKind::Length, "12 mm"),
        (QuantityKind::Force, "2 lbs"),
        (QuantityKind::Force, "2 kips"),
        (QuantityKind::Force, "2 tons"),
        (QuantityKind::Force, "2 n"),
        (QuantityKind::Force, "2 kn"),
        (QuantityKind::Moment, "2 lb-in"),
        (QuantityKind::Moment, "2 lb-ft"),
        (QuantityKind::Moment, "2 kip-in"),
        (QuantityKind::Moment, "2 kip-ft"),
        (QuantityKind::Moment, "2 n-m"),
        (QuantityKind::Moment, "2 kn-m"),
        (QuantityKind::ForcePerLength, "2 lb/in"),
        (QuantityKind::ForcePerLength, "2 lb/ft"),
        (QuantityKind::ForcePerLength, "2 kip/in"),
        (QuantityKind::ForcePerLength, "2 kip/ft"),
        (QuantityKind::ForcePerLength, "2 n/m"),
        (QuantityKind::ForcePerLength, "2 kn/m"),
        (QuantityKind::ForcePerArea, "2 lb/in^2"),
        (QuantityKind::ForcePerArea, "2 kip/in^2"),
        (QuantityKind::ForcePerArea, "2 ksi"),
    ];
    for (kind, input) in samples {
        let forms = matching_forms(kind, input);
        assert_eq!(
            forms.len(),
            1,
            "{} ({}) matched {:?}",
            input,
            kind,
            forms.iter().map(|f| f.name).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_every_form_is_reachable() {
    // One sample per form, in catalog order
    let samples = [
        (QuantityKind::Length, vec!["3 in", "1/4\"", "3'", "3' 3\"", "3' 3 1/4\"", "1 m", "1 cm", "1 mm"]),
        (QuantityKind::Force, vec!["1 lb", "1 k", "1 ton", "1 n", "1 kn"]),
        (QuantityKind::Moment, vec!["1 lb-in", "1 lb-ft", "1 k-in", "1 k-ft", "1 n-m", "1 kn-m"]),
        (
            QuantityKind::ForcePerLength,
            vec!["1 lb/in", "1 lb/ft", "1 k/in", "1 k/ft", "1 n/m", "1 kn/m"],
        ),
        (QuantityKind::ForcePerArea, vec!["1 lb/in^2", "1 k/in^2", "1 ksi"]),
    ];
    for (kind, inputs) in samples {
        let names: Vec<&str> = catalog(kind).iter().map(|form| form.name).collect();
        let recognized: Vec<&str> = inputs
            .iter()
            .map(|input| recognize(kind, input).map_or("none", |form| form.name))
            .collect();
        assert_eq!(recognized, names);
    }
}

#[test]
fn test_format_then_parse() {
    assert_eq!(parse_length(&format_feet_inches(40.0), None), 40.0);
    assert_eq!(parse_length(&format_inches(40.0), None), 40.0);
    assert_eq!(parse_length(&format_feet_inches(-5.0), None), -5.0);
    assert_eq!(parse_length(&format_feet_inches(-40.0), None), -40.0);
    assert_eq!(parse_force(&format_kips(2500.0), Some("kips")), 2500.0);
    assert_eq!(parse_moment(&format_kip_feet(12000.0), Some("kip-ft")), 12000.0);
    assert_eq!(parse_force_per_area(&format_ksi(36000.0), None), 36000.0);
}

proptest! {
    #[test]
    fn prop_length_round_trip(v in -10_000.0f64..10_000.0) {
        for display in [DisplayUnit::Inches, DisplayUnit::FeetInches] {
            let parsed = parse_length(&format_value(display, v), None);
            prop_assert!((parsed - v).abs() <= 0.5 + 1e-9, "{:?} {} -> {}", display, v, parsed);
        }
    }

    #[test]
    fn prop_two_decimal_round_trip(v in -1.0e7f64..1.0e7) {
        for display in [DisplayUnit::Kips, DisplayUnit::KipFeet, DisplayUnit::KipsPerFoot, DisplayUnit::Ksi] {
            let kind = display.kind();
            let text = format_value(display, v);
            let parsed = parse_quantity(kind, &text, display.reparse_hint());
            // Half a unit in the second decimal of the display unit, in canonical units
            let tolerance = 0.005 * parse_quantity(kind, "1", display.reparse_hint().or(Some("ksi")));
            prop_assert!((parsed - v).abs() <= tolerance + 1e-6, "{:?} {} -> {} -> {}", display, v, text, parsed);
        }
    }

    #[test]
    fn prop_garbage_never_panics(s in "\\PC*") {
        for kind in QuantityKind::ALL {
            let value = parse_quantity(kind, &s, None);
            prop_assert!(value.is_nan() || value.is_finite());
        }
    }
}
