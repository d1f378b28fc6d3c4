//! 총 발열량 → 노심 온도 변환 계수(k) 보정.
//!
//! T = 20 + k · heat 의 단일 선형 관계를 쓰며, k는 관측한 기준점 하나로 구한다.
//! 기본 기준점: uranium_fuel 16개, CO2 16000 mB에서 약 240 °C로 안정화.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ReactorError, ReferenceIssue, Result};
use super::fuel::FuelCatalog;

/// 기준 온도(°C). 발열이 없을 때의 노심 온도.
pub const BASE_TEMP_C: f64 = 20.0;

/// 보정에 쓰는 관측 기준점.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReference {
    /// 연료 식별자
    pub fuel: String,
    /// 연료봉 개수
    pub units: f64,
    /// 안정화된 노심 온도(°C)
    pub observed_temp_c: f64,
}

impl CalibrationReference {
    pub fn new(fuel: impl Into<String>, units: f64, observed_temp_c: f64) -> Self {
        Self {
            fuel: fuel.into(),
            units,
            observed_temp_c,
        }
    }

    /// 기본 기준점 (uranium_fuel × 16 → 240 °C).
    pub fn standard() -> Self {
        Self::new("uranium_fuel", 16.0, 240.0)
    }
}

impl Default for CalibrationReference {
    fn default() -> Self {
        Self::standard()
    }
}

/// 사용한 k 값이 어디서 왔는지 표시한다.
#[derive(Debug, Clone, PartialEq)]
pub enum CoefficientSource {
    /// 내장 기본 기준점
    Default,
    /// 사용자 기준점으로 보정
    Reference(CalibrationReference),
    /// 직접 지정
    Override,
    /// 대화형 보정 실패로 기본값 사용
    Fallback,
}

/// 한 번의 실행 동안 고정되는 보정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub k: f64,
    pub source: CoefficientSource,
}

impl Calibration {
    /// 내장 기준점으로 k를 구한다.
    pub fn standard(catalog: &FuelCatalog) -> Result<Self> {
        let k = derive_coefficient(catalog, &CalibrationReference::standard())?;
        Ok(Self {
            k,
            source: CoefficientSource::Default,
        })
    }

    pub fn from_reference(catalog: &FuelCatalog, reference: CalibrationReference) -> Result<Self> {
        let k = derive_coefficient(catalog, &reference)?;
        Ok(Self {
            k,
            source: CoefficientSource::Reference(reference),
        })
    }

    /// 직접 지정한 k. 유한수인지 외에는 검증하지 않는다.
    pub fn from_override(k: f64) -> Result<Self> {
        if !k.is_finite() {
            return Err(ReactorError::NonFiniteCoefficient(k));
        }
        Ok(Self {
            k,
            source: CoefficientSource::Override,
        })
    }

    /// 보정 실패 시 기본 k로 되돌린 결과를 표시한다.
    pub fn fallback(default: &Calibration) -> Self {
        Self {
            k: default.k,
            source: CoefficientSource::Fallback,
        }
    }
}

/// k = (T_obs − 20) / (units × heat_per_unit)
pub fn derive_coefficient(catalog: &FuelCatalog, reference: &CalibrationReference) -> Result<f64> {
    let spec = catalog.lookup(&reference.fuel).map_err(|_| {
        ReactorError::InvalidReference(ReferenceIssue::UnknownFuel(reference.fuel.clone()))
    })?;
    if reference.units.is_nan() || reference.units <= 0.0 {
        return Err(ReactorError::InvalidReference(
            ReferenceIssue::NonPositiveUnits(reference.units),
        ));
    }
    let total_heat = reference.units * spec.heat;
    if total_heat.is_nan() || total_heat <= 0.0 {
        return Err(ReactorError::InvalidReference(
            ReferenceIssue::NonPositiveHeat(total_heat),
        ));
    }
    let k = (reference.observed_temp_c - BASE_TEMP_C) / total_heat;
    debug!(fuel = %reference.fuel, units = reference.units, total_heat, k, "derived coefficient");
    Ok(k)
}

/// T = 20 + k · heat
pub fn temperature_from_heat(total_heat: f64, k: f64) -> f64 {
    BASE_TEMP_C + k * total_heat
}
