use thiserror::Error;

/// 노심 계산 파이프라인에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReactorError {
    /// 연료 목록에 없는 식별자
    #[error("알 수 없는 연료: '{id}' (--list-fuels 로 확인)")]
    UnknownFuel { id: String },

    /// 그리드 슬롯 개수 불일치
    #[error("그리드는 정확히 {expected}칸이어야 합니다 (입력 {got}칸)")]
    InvalidGrid { expected: usize, got: usize },

    /// 보정 기준점이 잘못됨
    #[error("보정 기준점 오류: {0}")]
    InvalidReference(ReferenceIssue),

    /// 직접 지정한 k 값이 유한수가 아님
    #[error("k 값은 유한한 숫자여야 합니다 (입력 {0})")]
    NonFiniteCoefficient(f64),

    /// 온도-압력 구간표 검증 실패
    #[error("온도 구간표 {index}번 구간 오류: {reason}")]
    InvalidSchedule { index: usize, reason: &'static str },
}

/// 보정 기준점이 거부된 구체적인 이유.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceIssue {
    #[error("알 수 없는 연료 '{0}'")]
    UnknownFuel(String),
    #[error("연료봉 개수는 0보다 커야 합니다 (입력 {0})")]
    NonPositiveUnits(f64),
    #[error("기준 총 발열량은 0보다 커야 합니다 (계산값 {0})")]
    NonPositiveHeat(f64),
}

pub type Result<T> = std::result::Result<T, ReactorError>;
