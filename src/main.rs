use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use zirnox_reactor_toolbox::app::{self, AppError, RunOptions};
use zirnox_reactor_toolbox::config;
use zirnox_reactor_toolbox::i18n::{self, keys, Translator};
use zirnox_reactor_toolbox::units::{PressureUnit, TemperatureUnit};

/// ZIRNOX 4x4 연료 그리드 계산기 (HBM NTM).
#[derive(Parser, Debug)]
#[command(name = "zirnox_reactor_toolbox_cli", version, about = "ZIRNOX 4x4 fuel grid calculator (HBM NTM).")]
struct Cli {
    /// 연료 키 목록을 출력하고 종료
    #[arg(long)]
    list_fuels: bool,
    /// CO2 양 (mB), 예: 16000
    #[arg(long = "co2-mb", alias = "co2-mB", value_name = "MB", allow_negative_numbers = true)]
    co2_mb: Option<f64>,
    /// 쉼표로 구분한 16칸 (연료 키 또는 empty)
    #[arg(long, conflicts_with = "interactive")]
    slots: Option<String>,
    /// 터미널에서 4행 × 4칸을 입력받음
    #[arg(long)]
    interactive: bool,
    /// k 값을 대화형으로 보정
    #[arg(long)]
    calibrate: bool,
    /// k 직접 지정 (T = 20 + k × heat)
    #[arg(long, allow_negative_numbers = true)]
    k: Option<f64>,
    /// 언어 (auto/ko/en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로 (기본 config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// 압력 표시 단위
    #[arg(long, value_enum)]
    pressure_unit: Option<PressureUnit>,
    /// 온도 표시 단위
    #[arg(long, value_enum)]
    temperature_unit: Option<TemperatureUnit>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // 테스트 하네스 등에서 이미 설정돼 있으면 무시한다.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 계산을 한 번 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            // 설정을 못 읽었으므로 언어는 명령행/시스템 기준으로만 정한다.
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            report_error(&tr, &err);
            return ExitCode::FAILURE;
        }
    };
    if let Some(unit) = cli.pressure_unit {
        cfg.display.pressure = unit;
    }
    if let Some(unit) = cli.temperature_unit {
        cfg.display.temperature = unit;
    }

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let options = RunOptions {
        list_fuels: cli.list_fuels,
        co2_mb: cli.co2_mb,
        slots: cli.slots,
        interactive: cli.interactive,
        calibrate: cli.calibrate,
        k: cli.k,
    };

    match app::run(&options, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&tr, &err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<config::Config, AppError> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    Ok(cfg)
}

fn report_error(tr: &Translator, err: &AppError) {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}
