use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::reactor::{Calibration, FuelCatalog, FuelGrid, ReactorError};
use crate::report;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 원자로 계산 오류
    #[error(transparent)]
    Reactor(#[from] ReactorError),
    /// 대화형 입력 도중 표준입력이 닫힘
    #[error("입력이 중간에 끝났습니다")]
    UnexpectedEof,
    /// 필수 인자 누락 (번역된 안내문)
    #[error("{0}")]
    Usage(String),
}

/// 한 번의 CLI 실행에 필요한 입력.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub list_fuels: bool,
    pub co2_mb: Option<f64>,
    pub slots: Option<String>,
    pub interactive: bool,
    pub calibrate: bool,
    pub k: Option<f64>,
}

/// 설정 파일에 저장된 값으로 k를 정한다. 직접 지정값 > 보정 기준점 > 내장 기본값.
pub fn configured_calibration(
    config: &Config,
    catalog: &FuelCatalog,
) -> Result<Calibration, ReactorError> {
    if let Some(k) = config.coefficient {
        return Calibration::from_override(k);
    }
    match &config.calibration {
        Some(reference) => Calibration::from_reference(catalog, reference.clone()),
        None => Calibration::standard(catalog),
    }
}

/// 명령행 --k > --calibrate > 설정 파일 순으로 k를 정한다.
pub fn resolve_calibration(
    options: &RunOptions,
    config: &Config,
    catalog: &FuelCatalog,
    tr: &Translator,
) -> Result<Calibration, AppError> {
    if let Some(k) = options.k {
        return Ok(Calibration::from_override(k)?);
    }
    if options.calibrate {
        let default = Calibration::standard(catalog)?;
        return ui_cli::calibrate_interactive(tr, catalog, &default);
    }
    Ok(configured_calibration(config, catalog)?)
}

/// CLI 한 번 실행: 그리드 입력 → k 결정 → 평가 → 보고서 출력.
pub fn run(options: &RunOptions, config: &Config, tr: &Translator) -> Result<(), AppError> {
    if options.list_fuels {
        println!("{}", report::render_fuel_list(tr, &FuelCatalog::standard()));
        return Ok(());
    }

    let model = config.model()?;

    let co2_mb = options
        .co2_mb
        .ok_or_else(|| AppError::Usage(tr.t(keys::ERROR_MISSING_CO2).to_string()))?;

    let grid = match (&options.slots, options.interactive) {
        (Some(csv), _) => FuelGrid::parse_slots(csv)?,
        (None, true) => ui_cli::prompt_grid(tr)?,
        (None, false) => {
            return Err(AppError::Usage(tr.t(keys::ERROR_MISSING_GRID).to_string()))
        }
    };
    // 보정 단계에 들어가기 전에 모르는 연료를 걸러낸다.
    grid.total_heat(&model.catalog)?;

    let calibration = resolve_calibration(options, config, &model.catalog, tr)?;
    info!(k = calibration.k, source = ?calibration.source, "coefficient resolved");

    let result = model.evaluate(co2_mb, grid.slots(), calibration.k)?;
    debug!(
        total_pressure_bar = result.total_pressure_bar,
        explodes = result.explodes,
        "grid evaluated"
    );

    println!(
        "{}",
        report::render_report(
            tr,
            &config.display,
            &grid,
            &result,
            &calibration,
            &model.schedule
        )
    );
    Ok(())
}
