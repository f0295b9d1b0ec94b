use crate::{classify, normalize, NumberKind, PhonyError, PreconditionError, MOBILE_PREFIXES};

use super::{init_logging, sample_numbers::SampleNumbers};

#[test]
fn classify_mobile() {
    init_logging();

    let parsed = classify("31123456").unwrap();
    assert_eq!(parsed.kind(), NumberKind::Mobile);
    assert!(parsed.is_mobile());
    assert_eq!(parsed.area(), "031");
    assert_eq!(parsed.number(), "123456");
    assert_eq!(parsed.national_digits(), "31123456");
}

#[test]
fn classify_fixed() {
    init_logging();

    let parsed = classify("12345678").unwrap();
    assert_eq!(parsed.kind(), NumberKind::Fixed);
    assert_eq!(parsed.area(), "1");
    assert_eq!(parsed.number(), "2345678");
    assert_eq!(parsed.national_digits(), "12345678");
}

#[test]
fn every_mobile_prefix_classifies_as_mobile() {
    init_logging();

    for prefix in MOBILE_PREFIXES {
        let canonical = format!("{}654321", &prefix[1..]);
        let parsed = classify(&canonical).unwrap();
        assert_eq!(parsed.kind(), NumberKind::Mobile, "prefix {prefix}");
        assert_eq!(parsed.area(), prefix);
        assert_eq!(parsed.number(), "654321");
    }
}

#[test]
fn neighbours_of_mobile_prefixes_are_fixed() {
    init_logging();

    for canonical in ["32123456", "60123456", "71123456", "20123456"] {
        let parsed = classify(canonical).unwrap();
        assert_eq!(parsed.kind(), NumberKind::Fixed, "number {canonical}");
        assert_eq!(parsed.area().len(), 1);
        assert_eq!(parsed.number().len(), 7);
    }
}

#[test]
fn segments_rebuild_canonical_number() {
    init_logging();

    for input in [
        SampleNumbers::mobile_international(),
        SampleNumbers::mobile_display(),
        SampleNumbers::fixed_national(),
        SampleNumbers::fixed_dashed(),
    ] {
        let canonical = normalize(input).unwrap();
        let parsed = classify(canonical.as_str()).unwrap();
        assert_eq!(parsed.national_digits(), canonical.as_str());
    }
}

#[test]
fn classify_checks_precondition() {
    init_logging();

    for given in ["", "3112345", "311234567", "031123456", "3112345a"] {
        assert_eq!(
            classify(given),
            Err(PhonyError::Precondition(PreconditionError::new(given))),
            "given {given:?}"
        );
    }
}
