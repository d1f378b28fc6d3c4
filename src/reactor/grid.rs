//! 4×4 연료 그리드와 총 발열량 계산.

use std::collections::BTreeMap;

use super::error::{ReactorError, Result};
use super::fuel::{FuelCatalog, EMPTY_FUEL};

/// 한 변의 슬롯 수.
pub const GRID_SIDE: usize = 4;
/// 전체 슬롯 수 (행 우선 4×4).
pub const GRID_SLOTS: usize = GRID_SIDE * GRID_SIDE;

/// 입력 토큰을 연료 키 형식으로 정규화한다.
/// 앞뒤 공백 제거, 소문자화, 공백→밑줄, 빈 문자열은 "empty".
pub fn normalize_token(token: &str) -> String {
    let t = token.trim().to_lowercase().replace(' ', "_");
    if t.is_empty() {
        EMPTY_FUEL.to_string()
    } else {
        t
    }
}

/// 16칸 슬롯의 총 발열량을 구한다.
pub fn total_heat<S: AsRef<str>>(catalog: &FuelCatalog, slots: &[S]) -> Result<f64> {
    if slots.len() != GRID_SLOTS {
        return Err(ReactorError::InvalidGrid {
            expected: GRID_SLOTS,
            got: slots.len(),
        });
    }
    slots
        .iter()
        .try_fold(0.0, |acc, id| Ok(acc + catalog.heat_of(id.as_ref())?))
}

/// 정확히 16칸인 연료 그리드. 연료 식별 여부는 평가 시점에 확인한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelGrid {
    slots: Vec<String>,
}

impl FuelGrid {
    pub fn new(slots: Vec<String>) -> Result<Self> {
        if slots.len() != GRID_SLOTS {
            return Err(ReactorError::InvalidGrid {
                expected: GRID_SLOTS,
                got: slots.len(),
            });
        }
        Ok(Self { slots })
    }

    /// 모든 칸이 같은 연료인 그리드.
    pub fn filled(id: &str) -> Self {
        Self {
            slots: vec![id.to_string(); GRID_SLOTS],
        }
    }

    pub fn empty() -> Self {
        Self::filled(EMPTY_FUEL)
    }

    /// 쉼표로 구분된 16개 항목을 정규화해 그리드로 만든다.
    pub fn parse_slots(csv: &str) -> Result<Self> {
        let slots = csv.split(',').map(normalize_token).collect();
        Self::new(slots)
    }

    /// 행 단위 입력(4칸씩)을 이어 붙여 그리드로 만든다.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = String>,
    {
        let slots = rows.into_iter().flatten().collect();
        Self::new(slots)
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn set_slot(&mut self, index: usize, id: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = normalize_token(id);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.slots.chunks(GRID_SIDE)
    }

    /// 연료별 개수 (빈칸 포함, 키 오름차순).
    pub fn fuel_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for id in &self.slots {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn total_heat(&self, catalog: &FuelCatalog) -> Result<f64> {
        total_heat(catalog, &self.slots)
    }
}
