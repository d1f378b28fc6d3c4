use tracing::debug;

use super::calibration::temperature_from_heat;
use super::coolant::{base_pressure, is_operational};
use super::error::Result;
use super::fuel::FuelCatalog;
use super::grid::total_heat;
use super::schedule::PressureSchedule;

/// 이 압력(bar) 이상이면 폭발로 판정한다.
pub const EXPLOSION_THRESHOLD_BAR: f64 = 31.0;

pub fn explodes(total_pressure_bar: f64) -> bool {
    total_pressure_bar >= EXPLOSION_THRESHOLD_BAR
}

/// 결과 해석 시 사용자에게 알릴 사항.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    /// CO2 부족으로 운전 불가
    NotOperational,
    /// 총 압력이 폭발 임계값 이상
    Explosion,
    /// 온도가 구간표 상한을 넘어 추가 압력이 고정됨
    BeyondSchedule,
}

/// 한 번의 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// CO2 양(mB)
    pub co2_mb: f64,
    /// 사용한 보정 계수 k
    pub coefficient: f64,
    pub total_heat: f64,
    /// 노심 온도(°C)
    pub temperature_c: f64,
    pub base_pressure_bar: f64,
    pub added_pressure_bar: f64,
    pub total_pressure_bar: f64,
    /// 폭발 임계값까지 남은 압력(bar). 음수면 이미 초과.
    pub pressure_margin_bar: f64,
    pub operational: bool,
    pub explodes: bool,
    pub schedule_clamped: bool,
}

impl EvaluationResult {
    pub fn notes(&self) -> Vec<Note> {
        let mut notes = Vec::new();
        if !self.operational {
            notes.push(Note::NotOperational);
        }
        if self.explodes {
            notes.push(Note::Explosion);
        }
        if self.schedule_clamped {
            notes.push(Note::BeyondSchedule);
        }
        notes
    }
}

/// 파이프라인에 필요한 불변 데이터 묶음 (연료 목록 + 온도 구간표).
#[derive(Debug, Clone, Default)]
pub struct ReactorModel {
    pub catalog: FuelCatalog,
    pub schedule: PressureSchedule,
}

impl ReactorModel {
    pub fn new(catalog: FuelCatalog, schedule: PressureSchedule) -> Self {
        Self { catalog, schedule }
    }

    pub fn standard() -> Self {
        Self::default()
    }

    /// CO2 양, 16칸 그리드, k로 전체 결과를 계산한다.
    pub fn evaluate<S: AsRef<str>>(&self, co2_mb: f64, slots: &[S], k: f64) -> Result<EvaluationResult> {
        evaluate(&self.catalog, &self.schedule, co2_mb, slots, k)
    }
}

/// 그리드 → 발열량 → 온도 → 추가 압력 → 총 압력 → 폭발 판정.
pub fn evaluate<S: AsRef<str>>(
    catalog: &FuelCatalog,
    schedule: &PressureSchedule,
    co2_mb: f64,
    slots: &[S],
    k: f64,
) -> Result<EvaluationResult> {
    let heat = total_heat(catalog, slots)?;
    let temperature_c = temperature_from_heat(heat, k);
    let base = base_pressure(co2_mb);
    let operational = is_operational(co2_mb);
    let added = schedule.evaluate(temperature_c);
    let total = base + added.bar;
    debug!(
        co2_mb,
        heat,
        temperature_c,
        base_bar = base,
        added_bar = added.bar,
        total_bar = total,
        "evaluated grid"
    );
    Ok(EvaluationResult {
        co2_mb,
        coefficient: k,
        total_heat: heat,
        temperature_c,
        base_pressure_bar: base,
        added_pressure_bar: added.bar,
        total_pressure_bar: total,
        pressure_margin_bar: EXPLOSION_THRESHOLD_BAR - total,
        operational,
        explodes: explodes(total),
        schedule_clamped: added.clamped,
    })
}
