use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::reactor::{
    CalibrationReference, FuelCatalog, PressureSchedule, ReactorError, ReactorModel,
    TemperatureSegment,
};
use crate::units::{PressureUnit, TemperatureUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 보고서에 쓰는 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayUnits {
    #[serde(default)]
    pub pressure: PressureUnit,
    #[serde(default)]
    pub temperature: TemperatureUnit,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en ...)
    #[serde(default = "default_language")]
    pub language: String,
    /// 사용자 언어팩 디렉터리
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// GUI 창 투명도
    #[serde(default = "default_window_alpha")]
    pub window_alpha: f32,
    /// 저장된 k 직접 지정값
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient: Option<f64>,
    // 이 아래는 TOML 표로 직렬화되므로 스칼라 필드 뒤에 둔다.
    #[serde(default)]
    pub display: DisplayUnits,
    /// 저장된 보정 기준점
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<CalibrationReference>,
    /// 기본 온도-압력 구간표를 대체할 구간 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_schedule: Option<Vec<TemperatureSegment>>,
    /// 로드/저장 경로
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_window_alpha() -> f32 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            language_pack_dir: None,
            window_alpha: default_window_alpha(),
            coefficient: None,
            display: DisplayUnits::default(),
            calibration: None,
            temperature_schedule: None,
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config");
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "wrote default config");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 설정된 구간표가 있으면 검증해 쓰고, 없으면 기본 구간표를 쓴다.
    pub fn schedule(&self) -> Result<PressureSchedule, ReactorError> {
        match &self.temperature_schedule {
            Some(segments) => PressureSchedule::new(segments.clone()),
            None => Ok(PressureSchedule::standard()),
        }
    }

    pub fn model(&self) -> Result<ReactorModel, ReactorError> {
        Ok(ReactorModel::new(FuelCatalog::standard(), self.schedule()?))
    }
}
