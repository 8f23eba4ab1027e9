use fred_navigator::error::NavigatorError;
use fred_navigator::params::{Selection, Topic};
use rstest::rstest;

#[rstest]
#[case(1.0, "R0=1.0")]
#[case(1.5, "R0=1.5")]
#[case(1.04, "R0=1.0")]
#[case(1.06, "R0=1.1")]
#[case(1.15, "R0=1.2")]
#[case(1.45, "R0=1.5")]
#[case(2.4, "R0=2.4")]
#[case(0.1, "R0=0.1")]
#[case(9.9, "R0=9.9")]
fn test_transmission_keys(#[case] r0: f64, #[case] expected: &str) {
    let selection = Selection::transmission(r0).unwrap();
    assert_eq!(selection.key().as_str(), expected);
}

#[rstest]
#[case(1.6, 0.0, "R0=1.6-Immunization=0.0")]
#[case(2.6, 0.8, "R0=2.6-Immunization=0.8")]
#[case(1.75, 0.3, "R0=1.8-Immunization=0.3")] // R0 moves in steps of 0.2
#[case(2.0, 0.26, "R0=2.0-Immunization=0.3")]
#[case(2.0, 0.35, "R0=2.0-Immunization=0.4")]
#[case(1.0, 0.9, "R0=1.0-Immunization=0.9")]
fn test_immunization_keys(#[case] r0: f64, #[case] rate: f64, #[case] expected: &str) {
    let selection = Selection::immunization(r0, rate).unwrap();
    assert_eq!(selection.key().as_str(), expected);
}

#[rstest]
#[case(0.0)]
#[case(10.0)]
#[case(-1.0)]
#[case(f64::NAN)]
fn test_out_of_range_r0_is_rejected(#[case] r0: f64) {
    let err = Selection::transmission(r0).unwrap_err();
    assert!(matches!(err, NavigatorError::InvalidParameter(_)), "{:?}", err);
}

#[test]
fn test_out_of_range_immunization_is_rejected() {
    assert!(Selection::immunization(1.6, 1.0).is_err());
    assert!(Selection::immunization(1.6, -0.1).is_err());
}

#[test]
fn test_defaults_match_pages() {
    assert_eq!(
        Selection::default_for(Topic::Transmission).key().as_str(),
        "R0=1.5"
    );
    assert_eq!(
        Selection::default_for(Topic::Immunization).key().as_str(),
        "R0=1.6-Immunization=0.0"
    );
}

#[test]
fn test_with_r0_keeps_immunization() {
    let selection = Selection::immunization(1.6, 0.4)
        .unwrap()
        .with_r0(2.2)
        .unwrap();
    assert_eq!(selection.key().as_str(), "R0=2.2-Immunization=0.4");
    assert_eq!(selection.r0(), "2.2");
}

#[test]
fn test_transmission_has_no_immunization() {
    let err = Selection::transmission(1.5)
        .unwrap()
        .with_immunization(0.2)
        .unwrap_err();
    assert!(matches!(err, NavigatorError::InvalidParameter(_)));
}

#[test]
fn test_captions() {
    assert_eq!(Selection::transmission(1.5).unwrap().caption(), "R0=1.5");
    assert_eq!(
        Selection::immunization(1.6, 0.3).unwrap().caption(),
        "R0=1.6 / Immunization Rate 30%"
    );
}
