//! config.toml 로드/저장과 구간표 덮어쓰기 테스트.
use std::fs;

use tempfile::tempdir;
use zirnox_reactor_toolbox::app::configured_calibration;
use zirnox_reactor_toolbox::config::{self, Config};
use zirnox_reactor_toolbox::reactor::{
    CalibrationReference, CoefficientSource, FuelCatalog, ReactorError,
};
use zirnox_reactor_toolbox::units::{PressureUnit, TemperatureUnit};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.display.pressure, PressureUnit::Bar);
    assert_eq!(cfg.coefficient, None);
    assert_eq!(cfg.path(), Some(path.as_path()));
}

#[test]
fn save_then_load_keeps_values() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    let mut cfg = config::load_from(&path).expect("load");
    cfg.language = "ko".into();
    cfg.coefficient = Some(0.3);
    cfg.display.pressure = PressureUnit::KiloPascal;
    cfg.display.temperature = TemperatureUnit::Kelvin;
    cfg.calibration = Some(CalibrationReference::new("les", 4.0, 320.0));
    cfg.save().expect("save");

    let text = fs::read_to_string(&path).expect("read");
    assert!(text.contains("pressure = \"kpa\""), "{text}");

    let loaded = config::load_from(&path).expect("reload");
    assert_eq!(loaded, cfg);
}

#[test]
fn schedule_override_from_toml() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
language = "en"

[[temperature_schedule]]
lo = 20.0
hi = 120.0
delta = 5.0

[[temperature_schedule]]
lo = 120.0
hi = 220.0
delta = 5.0
"#,
    )
    .expect("write");
    let cfg = config::load_from(&path).expect("load");
    let schedule = cfg.schedule().expect("valid schedule");
    assert_eq!(schedule.upper_bound(), Some(220.0));
    assert_eq!(schedule.added_pressure(120.0), 5.0);
    assert_eq!(schedule.max_added_pressure(), 10.0);
}

#[test]
fn invalid_schedule_is_reported() {
    let mut cfg = Config::default();
    cfg.temperature_schedule = Some(vec![
        zirnox_reactor_toolbox::reactor::TemperatureSegment::new(100.0, 50.0, 1.0),
    ]);
    assert!(matches!(
        cfg.model(),
        Err(ReactorError::InvalidSchedule { index: 0, .. })
    ));
}

#[test]
fn broken_toml_is_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Parse(_))
    ));
}

#[test]
fn coefficient_beats_calibration_in_config() {
    let catalog = FuelCatalog::standard();
    let mut cfg = Config::default();
    assert_eq!(
        configured_calibration(&cfg, &catalog).expect("default").source,
        CoefficientSource::Default
    );

    let reference = CalibrationReference::new("les", 4.0, 320.0);
    cfg.calibration = Some(reference.clone());
    let cal = configured_calibration(&cfg, &catalog).expect("reference");
    assert_eq!(cal.k, 0.5);
    assert_eq!(cal.source, CoefficientSource::Reference(reference));

    cfg.coefficient = Some(0.1);
    let cal = configured_calibration(&cfg, &catalog).expect("override");
    assert_eq!(cal.k, 0.1);
    assert_eq!(cal.source, CoefficientSource::Override);
}
