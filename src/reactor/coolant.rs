/// CO2(mB) → 기본 압력(bar) 계단 함수.
///
/// 높은 임계값부터 내려오며 `co2 >= 임계값`을 처음 만족하는 단계를 쓴다.
/// 각 구간은 하한 포함이다.
const PRESSURE_STEPS: [(f64, f64); 10] = [
    (16_000.0, 10.0),
    (15_000.0, 9.0),
    (13_000.0, 8.0), // 13000, 14000
    (11_000.0, 7.0), // 11000, 12000
    (10_000.0, 6.0),
    (9_000.0, 5.0),
    (6_000.0, 4.0), // 6000 ~ 8000
    (5_000.0, 3.0),
    (3_000.0, 2.0), // 3000, 4000
    (1_000.0, 1.0), // 1000, 2000
];

/// 원자로가 동작한다고 보는 최소 CO2 양(mB).
pub const MIN_OPERATIONAL_CO2_MB: f64 = 5_000.0;

/// CO2 양으로부터 기본 압력(bar)을 구한다. 음수를 포함한 모든 실수를 받는다.
pub fn base_pressure(co2_mb: f64) -> f64 {
    if co2_mb <= 0.0 {
        return 0.0;
    }
    PRESSURE_STEPS
        .iter()
        .find(|(threshold, _)| co2_mb >= *threshold)
        .map(|(_, bar)| *bar)
        .unwrap_or(0.0)
}

/// CO2가 5000 mB 이상이면 운전 가능으로 본다.
pub fn is_operational(co2_mb: f64) -> bool {
    co2_mb >= MIN_OPERATIONAL_CO2_MB
}
