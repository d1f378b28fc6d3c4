//! 텍스트 보고서 렌더링 테스트.
use zirnox_reactor_toolbox::config::DisplayUnits;
use zirnox_reactor_toolbox::i18n::Translator;
use zirnox_reactor_toolbox::reactor::{Calibration, FuelCatalog, FuelGrid, ReactorModel};
use zirnox_reactor_toolbox::report::{group_thousands, render_fuel_list, render_grid, render_report};
use zirnox_reactor_toolbox::units::{PressureUnit, TemperatureUnit};

fn render(co2_mb: f64, grid: &FuelGrid, display: DisplayUnits) -> String {
    let tr = Translator::new("en");
    let model = ReactorModel::standard();
    let cal = Calibration::standard(&model.catalog).expect("calibration");
    let result = model
        .evaluate(co2_mb, grid.slots(), cal.k)
        .expect("evaluate");
    render_report(&tr, &display, grid, &result, &cal, &model.schedule)
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(50_000), "50,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn fuel_list_is_sorted_with_lifetimes() {
    let out = render_fuel_list(&Translator::new("en"), &FuelCatalog::standard());
    assert!(out.contains("Fuel keys you can use:"));
    assert!(out.contains("natural_uranium"));
    assert!(out.contains("lifetime=250,000"));
    assert!(out.contains("Use 'empty' for blank slots."));
    let les = out.find("  les ").expect("les row");
    let mox = out.find("  mox_fuel ").expect("mox row");
    assert!(les < mox);
}

#[test]
fn grid_renders_four_rows() {
    let out = render_grid(&FuelGrid::filled("uranium_fuel"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].matches(" | ").count(), 3);
}

#[test]
fn report_lists_results_in_bar() {
    let out = render(16_000.0, &FuelGrid::filled("uranium_fuel"), DisplayUnits::default());
    assert!(out.contains("=== ZIRNOX 4x4 Grid ==="));
    assert!(out.contains("=== Results ==="));
    assert!(out.contains("uranium_fuel x16"));
    assert!(out.contains("10.000 bar"));
    assert!(out.contains("19.000 bar"));
    assert!(out.contains("240.000 °C"));
    assert!(out.contains("0.275000"));
    assert!(out.contains("default reference"));
    assert!(!out.contains("Note:"));
}

#[test]
fn report_notes_for_cold_empty_grid() {
    let out = render(4_000.0, &FuelGrid::empty(), DisplayUnits::default());
    assert!(out.contains("Note: the reactor is not operational because CO2 < 5000 mB."));
    assert!(!out.contains("blow up"));
}

#[test]
fn report_notes_for_explosion_and_clamp() {
    let out = render(16_000.0, &FuelGrid::filled("les"), DisplayUnits::default());
    assert!(out.contains("Note: Total pressure hit 31 bar or more, so this would blow up."));
    assert!(out.contains("beyond the pressure schedule (500 C)"));
}

#[test]
fn report_uses_display_units() {
    let display = DisplayUnits {
        pressure: PressureUnit::KiloPascal,
        temperature: TemperatureUnit::Kelvin,
    };
    let out = render(16_000.0, &FuelGrid::empty(), display);
    assert!(out.contains("1000.000 kPa"));
    assert!(out.contains("293.150 K"));
}
