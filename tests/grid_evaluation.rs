//! 그리드 → 발열량 → 온도 → 압력 → 폭발 판정 전체 파이프라인 테스트.
use zirnox_reactor_toolbox::reactor::{
    normalize_token, Calibration, FuelCatalog, FuelGrid, Note, ReactorError, ReactorModel,
    EXPLOSION_THRESHOLD_BAR,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn default_k() -> f64 {
    Calibration::standard(&FuelCatalog::standard())
        .expect("standard calibration")
        .k
}

#[test]
fn full_uranium_grid_at_16000_mb() {
    let model = ReactorModel::standard();
    let grid = FuelGrid::filled("uranium_fuel");
    let r = model
        .evaluate(16_000.0, grid.slots(), default_k())
        .expect("evaluate");

    assert_eq!(r.total_heat, 800.0);
    assert_close(r.temperature_c, 240.0);
    assert_eq!(r.base_pressure_bar, 10.0);
    assert!(r.operational);
    assert_close(r.added_pressure_bar, 9.0);
    assert_close(r.total_pressure_bar, 19.0);
    assert_close(r.pressure_margin_bar, 12.0);
    assert!(!r.explodes);
    assert!(!r.schedule_clamped);
    assert!(r.notes().is_empty());
}

#[test]
fn empty_grid_below_operational_co2() {
    let model = ReactorModel::standard();
    let r = model
        .evaluate(4_000.0, FuelGrid::empty().slots(), default_k())
        .expect("evaluate");

    assert_eq!(r.total_heat, 0.0);
    assert_eq!(r.temperature_c, 20.0);
    assert_eq!(r.added_pressure_bar, 0.0);
    assert_eq!(r.base_pressure_bar, 2.0);
    assert_eq!(r.total_pressure_bar, 2.0);
    assert!(!r.operational);
    assert!(!r.explodes);
    assert_eq!(r.notes(), vec![Note::NotOperational]);
}

#[test]
fn exactly_31_bar_explodes() {
    // 11×les + 1×uranium_233 + 2×uranium_235 = 1920 heat, k = 0.25 → 500 °C → 21 bar
    let mut slots = vec!["les"; 11];
    slots.push("uranium_233");
    slots.extend(["uranium_235", "uranium_235", "empty", "empty"]);
    let model = ReactorModel::standard();
    let r = model.evaluate(16_000.0, &slots, 0.25).expect("evaluate");

    assert_eq!(r.total_heat, 1_920.0);
    assert_eq!(r.temperature_c, 500.0);
    assert_eq!(r.added_pressure_bar, 21.0);
    assert_eq!(r.total_pressure_bar, EXPLOSION_THRESHOLD_BAR);
    assert!(r.explodes);
    assert!(!r.schedule_clamped);
    assert_eq!(r.notes(), vec![Note::Explosion]);
}

#[test]
fn hot_grid_explodes_and_clamps() {
    let model = ReactorModel::standard();
    let r = model
        .evaluate(16_000.0, FuelGrid::filled("les").slots(), default_k())
        .expect("evaluate");

    assert_eq!(r.total_heat, 2_400.0);
    assert!(r.temperature_c > 500.0);
    assert_eq!(r.added_pressure_bar, 21.0);
    assert!(r.explodes);
    assert!(r.schedule_clamped);
    assert!(r.pressure_margin_bar <= 0.0);
    assert_eq!(r.notes(), vec![Note::Explosion, Note::BeyondSchedule]);
}

#[test]
fn just_below_threshold_holds() {
    let model = ReactorModel::standard();
    let r = model
        .evaluate(15_000.0, FuelGrid::filled("les").slots(), default_k())
        .expect("evaluate");
    assert_eq!(r.total_pressure_bar, 30.0);
    assert!(!r.explodes);
}

#[test]
fn fifteen_slots_is_invalid_grid() {
    let model = ReactorModel::standard();
    let slots = vec!["uranium_fuel"; 15];
    let err = model.evaluate(16_000.0, &slots, 0.275).unwrap_err();
    assert_eq!(err, ReactorError::InvalidGrid { expected: 16, got: 15 });

    let parsed = FuelGrid::parse_slots("les,les,les").unwrap_err();
    assert_eq!(parsed, ReactorError::InvalidGrid { expected: 16, got: 3 });
}

#[test]
fn unknown_slot_is_unknown_fuel() {
    let model = ReactorModel::standard();
    let mut slots = vec!["uranium_fuel"; 16];
    slots[7] = "plutonium_rod";
    let err = model.evaluate(16_000.0, &slots, 0.275).unwrap_err();
    assert_eq!(
        err,
        ReactorError::UnknownFuel {
            id: "plutonium_rod".into()
        }
    );
}

#[test]
fn tokens_are_normalized() {
    assert_eq!(normalize_token("  Uranium Fuel "), "uranium_fuel");
    assert_eq!(normalize_token("LES"), "les");
    assert_eq!(normalize_token("   "), "empty");
    assert_eq!(normalize_token(""), "empty");
}

#[test]
fn parse_slots_normalizes_and_keeps_blank_slots() {
    let csv = "Uranium Fuel, uranium_fuel,,MOX_FUEL,les,les,les,les,empty,empty,empty,empty,zfb_mox,zfb_mox,zfb_mox, zfb_mox";
    let grid = FuelGrid::parse_slots(csv).expect("parse");
    assert_eq!(grid.slots()[0], "uranium_fuel");
    assert_eq!(grid.slots()[2], "empty");
    assert_eq!(grid.slots()[3], "mox_fuel");

    let counts = grid.fuel_counts();
    assert_eq!(counts.get("empty"), Some(&5));
    assert_eq!(counts.get("les"), Some(&4));
    assert_eq!(counts.get("zfb_mox"), Some(&4));

    let heat = grid.total_heat(&FuelCatalog::standard()).expect("heat");
    assert_eq!(heat, 2.0 * 50.0 + 75.0 + 4.0 * 150.0 + 4.0 * 35.0);
}

#[test]
fn rows_are_four_by_four() {
    let mut grid = FuelGrid::empty();
    grid.set_slot(5, "Thorium Fuel");
    let rows: Vec<&[String]> = grid.rows().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 4));
    assert_eq!(rows[1][1], "thorium_fuel");
}

#[test]
fn catalog_lookup() {
    let catalog = FuelCatalog::standard();
    assert_eq!(catalog.heat_of("uranium_fuel").expect("known"), 50.0);
    assert_eq!(catalog.heat_of("empty").expect("known"), 0.0);
    assert_eq!(catalog.lookup("les").expect("known").lifetime_ticks, 150_000);
    assert!(!catalog.contains("plutonium_rod"));
    let sorted: Vec<&str> = catalog.sorted().iter().map(|f| f.id).collect();
    let mut expected = sorted.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
    assert_eq!(sorted.len(), 10);
}
