//! ZIRNOX 4×4 연료 그리드 계산 모듈 모음.
//! 연료 목록, CO2 압력, 열→온도 보정, 온도→압력 구간표, 그리드 평가, 최종 판정으로 구성한다.

pub mod calibration;
pub mod coolant;
pub mod error;
pub mod fuel;
pub mod grid;
pub mod schedule;
pub mod verdict;

pub use calibration::*;
pub use coolant::*;
pub use error::{ReactorError, ReferenceIssue};
pub use fuel::*;
pub use grid::*;
pub use schedule::*;
pub use verdict::*;
