//! 보고서 표시 단위 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::PressureUnit;
pub use temperature::TemperatureUnit;
