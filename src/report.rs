//! 텍스트 보고서 생성. CLI 출력과 GUI 보고서 내보내기에서 같이 쓴다.

use crate::config::DisplayUnits;
use crate::i18n::{keys, Translator};
use crate::reactor::{
    Calibration, CoefficientSource, EvaluationResult, FuelCatalog, FuelGrid, Note,
    PressureSchedule,
};
use crate::units::{pressure, temperature};

const LABEL_WIDTH: usize = 25;
const SLOT_WIDTH: usize = 15;

/// 1234567 → "1,234,567"
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// --list-fuels 출력.
pub fn render_fuel_list(tr: &Translator, catalog: &FuelCatalog) -> String {
    let mut lines = vec![tr.t(keys::FUEL_LIST_HEADING).to_string()];
    for f in catalog.sorted() {
        lines.push(format!(
            "  {:<16} -> {:<16} | heat={} | lifetime={}",
            f.id,
            f.display,
            f.heat,
            group_thousands(f.lifetime_ticks)
        ));
    }
    lines.push(tr.t(keys::FUEL_LIST_EMPTY_HINT).to_string());
    lines.join("\n")
}

/// 4행 표 형태로 그리드를 그린다.
pub fn render_grid(grid: &FuelGrid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|id| format!("{:<width$}", id, width = SLOT_WIDTH))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_source(tr: &Translator, calibration: &Calibration) -> String {
    match &calibration.source {
        CoefficientSource::Default => tr.t(keys::K_SOURCE_DEFAULT).to_string(),
        CoefficientSource::Reference(r) => tr.tf(
            keys::K_SOURCE_REFERENCE,
            &[
                ("fuel", r.fuel.clone()),
                ("units", r.units.to_string()),
                ("temp", r.observed_temp_c.to_string()),
            ],
        ),
        CoefficientSource::Override => tr.t(keys::K_SOURCE_OVERRIDE).to_string(),
        CoefficientSource::Fallback => tr.t(keys::K_SOURCE_FALLBACK).to_string(),
    }
}

pub fn describe_note(tr: &Translator, note: Note, schedule: &PressureSchedule) -> String {
    match note {
        Note::NotOperational => tr.t(keys::NOTE_NOT_OPERATIONAL).to_string(),
        Note::Explosion => tr.t(keys::NOTE_EXPLOSION).to_string(),
        Note::BeyondSchedule => tr.tf(
            keys::NOTE_BEYOND_SCHEDULE,
            &[(
                "max",
                schedule
                    .upper_bound()
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            )],
        ),
    }
}

fn line(label: &str, value: String) -> String {
    format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)
}

/// 그리드 표, 결과 목록, 참고 사항을 담은 전체 보고서.
pub fn render_report(
    tr: &Translator,
    display: &DisplayUnits,
    grid: &FuelGrid,
    result: &EvaluationResult,
    calibration: &Calibration,
    schedule: &PressureSchedule,
) -> String {
    let p_unit = display.pressure;
    let t_unit = display.temperature;
    let bar = |v: f64| format!("{:.3} {}", pressure::from_bar(v, p_unit), p_unit.symbol());

    let mix = grid
        .fuel_counts()
        .iter()
        .map(|(id, n)| format!("{id} x{n}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        tr.t(keys::REPORT_GRID_HEADING).to_string(),
        render_grid(grid),
        line(tr.t(keys::REPORT_FUEL_MIX), mix),
        tr.t(keys::REPORT_RESULTS_HEADING).to_string(),
        line(tr.t(keys::REPORT_CO2), result.co2_mb.to_string()),
        line(
            tr.t(keys::REPORT_OPERATIONAL),
            tr.yes_no(result.operational).to_string(),
        ),
        line(tr.t(keys::REPORT_BASE_PRESSURE), bar(result.base_pressure_bar)),
        line(tr.t(keys::REPORT_TOTAL_HEAT), format!("{:.3}", result.total_heat)),
        line(tr.t(keys::REPORT_K), format!("{:.6}", result.coefficient)),
        line(tr.t(keys::REPORT_K_SOURCE), describe_source(tr, calibration)),
        line(
            tr.t(keys::REPORT_TEMPERATURE),
            format!(
                "{:.3} {}",
                temperature::from_celsius(result.temperature_c, t_unit),
                t_unit.symbol()
            ),
        ),
        line(tr.t(keys::REPORT_ADDED_PRESSURE), bar(result.added_pressure_bar)),
        line(tr.t(keys::REPORT_TOTAL_PRESSURE), bar(result.total_pressure_bar)),
        line(tr.t(keys::REPORT_MARGIN), bar(result.pressure_margin_bar)),
        line(
            tr.t(keys::REPORT_EXPLOSION),
            tr.yes_no(result.explodes).to_string(),
        ),
    ];

    let notes = result.notes();
    if !notes.is_empty() {
        lines.push(String::new());
        lines.extend(notes.into_iter().map(|n| describe_note(tr, n, schedule)));
    }
    lines.join("\n")
}
