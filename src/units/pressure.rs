use serde::{Deserialize, Serialize};

/// 보고서 표시용 압력 단위. 내부 계산은 항상 bar 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[default]
    Bar,
    #[serde(rename = "kpa")]
    #[value(name = "kpa")]
    KiloPascal,
    Psi,
    Atm,
}

const KPA_PER_BAR: f64 = 100.0;
const PSI_PER_BAR: f64 = 14.503_773_8;
const ATM_BAR: f64 = 1.01325;

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
        }
    }
}

/// bar 값을 원하는 단위로 변환한다. 게임 내 압력은 게이지/절대 구분이 없으므로 배율만 적용한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::KiloPascal => value_bar * KPA_PER_BAR,
        PressureUnit::Psi => value_bar * PSI_PER_BAR,
        PressureUnit::Atm => value_bar / ATM_BAR,
    }
}
