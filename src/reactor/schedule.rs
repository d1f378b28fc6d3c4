//! 노심 온도(°C) → 추가 압력(bar) 구간표와 구간별 선형 보간.
//!
//! 각 구간 (lo, hi, delta)는 온도가 lo에서 hi까지 오르는 동안 delta bar를
//! 비례적으로 더한다. 온도가 지나간 구간은 전부, 걸쳐 있는 구간은 일부만
//! 반영하고 그 뒤 구간은 반영하지 않는다.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::calibration::BASE_TEMP_C;
use super::error::{ReactorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSegment {
    /// 구간 시작 온도(°C)
    pub lo: f64,
    /// 구간 끝 온도(°C)
    pub hi: f64,
    /// 구간 전체를 지났을 때 더해지는 압력(bar)
    pub delta: f64,
}

impl TemperatureSegment {
    pub const fn new(lo: f64, hi: f64, delta: f64) -> Self {
        Self { lo, hi, delta }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }
}

const fn seg(lo: f64, hi: f64, delta: f64) -> TemperatureSegment {
    TemperatureSegment::new(lo, hi, delta)
}

// 메모의 "240 to 280"은 겹침을 피하려고 "260 to 280"으로 해석한다.
const STANDARD_SEGMENTS: [TemperatureSegment; 15] = [
    seg(20.0, 50.0, 1.0),
    seg(50.0, 120.0, 3.0),
    seg(120.0, 180.0, 2.0),
    seg(180.0, 220.0, 2.0),
    seg(220.0, 260.0, 2.0),
    seg(260.0, 280.0, 1.0),
    seg(280.0, 317.0, 1.0),
    seg(317.0, 360.0, 2.0),
    seg(360.0, 398.0, 1.0),
    seg(398.0, 419.0, 1.0),
    seg(419.0, 453.0, 2.0),
    seg(453.0, 469.0, 1.0),
    seg(469.0, 480.0, 0.0),
    seg(480.0, 488.0, 1.0),
    seg(488.0, 500.0, 1.0),
];

/// 보간 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddedPressure {
    pub bar: f64,
    /// true면 온도가 구간표 상한을 넘어 마지막 값으로 고정됐음을 의미한다.
    pub clamped: bool,
}

/// 오름차순으로 정렬된, 서로 겹치지 않는 구간 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSchedule {
    segments: Vec<TemperatureSegment>,
}

impl Default for PressureSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl PressureSchedule {
    pub fn standard() -> Self {
        Self {
            segments: STANDARD_SEGMENTS.to_vec(),
        }
    }

    /// 설정 파일 등에서 받은 구간표를 검증해 만든다.
    /// 구간 사이 빈틈은 허용하며(기여 0), 폭이 0인 구간은 계산 시 건너뛴다.
    pub fn new(segments: Vec<TemperatureSegment>) -> Result<Self> {
        let mut prev_hi = f64::NEG_INFINITY;
        for (index, s) in segments.iter().enumerate() {
            if !(s.lo.is_finite() && s.hi.is_finite() && s.delta.is_finite()) {
                return Err(ReactorError::InvalidSchedule {
                    index,
                    reason: "유한하지 않은 값",
                });
            }
            if s.hi < s.lo {
                return Err(ReactorError::InvalidSchedule {
                    index,
                    reason: "끝 온도가 시작 온도보다 낮음",
                });
            }
            if s.delta < 0.0 {
                return Err(ReactorError::InvalidSchedule {
                    index,
                    reason: "압력 증가분이 음수",
                });
            }
            if s.lo < prev_hi {
                return Err(ReactorError::InvalidSchedule {
                    index,
                    reason: "이전 구간과 겹치거나 순서가 어긋남",
                });
            }
            prev_hi = s.hi;
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[TemperatureSegment] {
        &self.segments
    }

    /// 마지막 구간의 끝 온도. 구간이 없으면 None.
    pub fn upper_bound(&self) -> Option<f64> {
        self.segments.last().map(|s| s.hi)
    }

    /// 구간표가 줄 수 있는 최대 추가 압력.
    pub fn max_added_pressure(&self) -> f64 {
        self.segments.iter().map(|s| s.delta).sum()
    }

    /// 온도에 따른 누적 추가 압력(bar).
    pub fn added_pressure(&self, temp_c: f64) -> f64 {
        if temp_c <= BASE_TEMP_C {
            return 0.0;
        }
        let mut added = 0.0;
        for s in &self.segments {
            if temp_c <= s.lo {
                break;
            }
            let span = s.span();
            if span <= 0.0 {
                continue;
            }
            let portion = temp_c.min(s.hi) - s.lo;
            if portion > 0.0 {
                added += portion / span * s.delta;
            }
            if temp_c < s.hi {
                break;
            }
        }
        added
    }

    /// `added_pressure`에 구간표 상한 초과 여부를 함께 돌려준다.
    pub fn evaluate(&self, temp_c: f64) -> AddedPressure {
        let bar = self.added_pressure(temp_c);
        let clamped = self.upper_bound().is_some_and(|hi| temp_c > hi);
        if clamped {
            warn!(
                temp_c,
                upper_bound = ?self.upper_bound(),
                "temperature beyond schedule range; added pressure clamped"
            );
        }
        AddedPressure { bar, clamped }
    }
}
