//! k 보정 계수 유도와 역변환 테스트.
use zirnox_reactor_toolbox::reactor::{
    derive_coefficient, temperature_from_heat, Calibration, CalibrationReference,
    CoefficientSource, FuelCatalog, ReactorError, ReferenceIssue,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn default_reference_gives_0_275() {
    let catalog = FuelCatalog::standard();
    let k = derive_coefficient(&catalog, &CalibrationReference::standard()).expect("derive");
    assert_close(k, 0.275);

    let cal = Calibration::standard(&catalog).expect("standard calibration");
    assert_eq!(cal.k, k);
    assert_eq!(cal.source, CoefficientSource::Default);
}

#[test]
fn derived_k_reproduces_observed_temperature() {
    let catalog = FuelCatalog::standard();
    let k = derive_coefficient(&catalog, &CalibrationReference::standard()).expect("derive");
    assert_close(temperature_from_heat(16.0 * 50.0, k), 240.0);

    let les = CalibrationReference::new("les", 4.0, 320.0);
    let k = derive_coefficient(&catalog, &les).expect("derive les");
    assert_close(temperature_from_heat(4.0 * 150.0, k), 320.0);
}

#[test]
fn zero_units_rejected() {
    let catalog = FuelCatalog::standard();
    let err = derive_coefficient(&catalog, &CalibrationReference::new("uranium_fuel", 0.0, 240.0))
        .unwrap_err();
    assert_eq!(
        err,
        ReactorError::InvalidReference(ReferenceIssue::NonPositiveUnits(0.0))
    );
}

#[test]
fn empty_fuel_reference_has_no_heat() {
    let catalog = FuelCatalog::standard();
    let err = derive_coefficient(&catalog, &CalibrationReference::new("empty", 16.0, 240.0))
        .unwrap_err();
    assert!(matches!(
        err,
        ReactorError::InvalidReference(ReferenceIssue::NonPositiveHeat(_))
    ));
}

#[test]
fn unknown_reference_fuel_is_invalid_reference() {
    let catalog = FuelCatalog::standard();
    let err = Calibration::from_reference(
        &catalog,
        CalibrationReference::new("plutonium_rod", 16.0, 240.0),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ReactorError::InvalidReference(ReferenceIssue::UnknownFuel("plutonium_rod".into()))
    );
}

#[test]
fn reference_keeps_its_source() {
    let catalog = FuelCatalog::standard();
    let reference = CalibrationReference::new("mox_fuel", 8.0, 170.0);
    let cal = Calibration::from_reference(&catalog, reference.clone()).expect("calibrate");
    assert_close(cal.k, 150.0 / 600.0);
    assert_eq!(cal.source, CoefficientSource::Reference(reference));
}

#[test]
fn override_must_be_finite() {
    let cal = Calibration::from_override(-0.5).expect("negative is allowed");
    assert_eq!(cal.k, -0.5);
    assert_eq!(cal.source, CoefficientSource::Override);

    assert!(matches!(
        Calibration::from_override(f64::NAN),
        Err(ReactorError::NonFiniteCoefficient(_))
    ));
    assert!(Calibration::from_override(f64::INFINITY).is_err());
}

#[test]
fn fallback_keeps_default_k() {
    let catalog = FuelCatalog::standard();
    let default = Calibration::standard(&catalog).expect("standard");
    let fb = Calibration::fallback(&default);
    assert_eq!(fb.k, default.k);
    assert_eq!(fb.source, CoefficientSource::Fallback);
}
