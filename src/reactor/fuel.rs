//! ZIRNOX 연료봉 목록. 발열량(heat/tick)을 정적 계산용 "열량"으로 취급한다.
//! 수명 값은 참고용이며 계산에는 쓰이지 않는다.

use super::error::{ReactorError, Result};

/// 빈 슬롯을 나타내는 식별자.
pub const EMPTY_FUEL: &str = "empty";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSpec {
    pub id: &'static str,
    pub display: &'static str,
    pub heat: f64,
    pub lifetime_ticks: u32,
}

impl FuelSpec {
    pub const fn new(id: &'static str, display: &'static str, heat: f64, lifetime_ticks: u32) -> Self {
        Self {
            id,
            display,
            heat,
            lifetime_ticks,
        }
    }
}

/// 읽기 전용 연료 목록. 프로세스 시작 시 한 번 만들어 참조로 넘긴다.
#[derive(Debug, Clone, Copy)]
pub struct FuelCatalog {
    fuels: &'static [FuelSpec],
}

impl Default for FuelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FuelCatalog {
    /// 게임 내 기본 연료 목록.
    pub const fn standard() -> Self {
        Self { fuels: FUELS }
    }

    /// 식별자로 연료를 찾는다. 없으면 `UnknownFuel`.
    pub fn lookup(&self, id: &str) -> Result<&'static FuelSpec> {
        let fuels: &'static [FuelSpec] = self.fuels;
        fuels
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ReactorError::UnknownFuel { id: id.to_string() })
    }

    pub fn heat_of(&self, id: &str) -> Result<f64> {
        self.lookup(id).map(|f| f.heat)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fuels.iter().any(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FuelSpec> {
        let fuels: &'static [FuelSpec] = self.fuels;
        fuels.iter()
    }

    /// 식별자 오름차순으로 정렬된 목록 (--list-fuels 출력용).
    pub fn sorted(&self) -> Vec<&'static FuelSpec> {
        let mut list: Vec<_> = self.iter().collect();
        list.sort_by_key(|f| f.id);
        list
    }
}

const FUELS: &[FuelSpec] = &[
    FuelSpec::new("natural_uranium", "Natural Uranium", 30.0, 250_000),
    FuelSpec::new("uranium_fuel", "Uranium Fuel", 50.0, 200_000),
    FuelSpec::new("thorium_fuel", "Thorium Fuel", 40.0, 200_000),
    FuelSpec::new("mox_fuel", "MOX Fuel", 75.0, 165_000),
    FuelSpec::new("plutonium_fuel", "Plutonium Fuel", 65.0, 175_000),
    FuelSpec::new("uranium_233", "Uranium 233", 100.0, 150_000),
    FuelSpec::new("uranium_235", "Uranium 235", 85.0, 165_000),
    FuelSpec::new("les", "LES", 150.0, 150_000),
    FuelSpec::new("zfb_mox", "ZFB MOX", 35.0, 50_000),
    FuelSpec::new(EMPTY_FUEL, "Empty", 0.0, 0),
];
