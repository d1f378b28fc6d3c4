use std::io::{self, Write};

use tracing::warn;

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::reactor::{
    normalize_token, Calibration, CalibrationReference, FuelCatalog, FuelGrid, GRID_SIDE,
};

/// 4행 × 4칸을 입력받는다. 칸 수가 맞지 않는 행은 다시 묻는다.
pub fn prompt_grid(tr: &Translator) -> Result<FuelGrid, AppError> {
    println!("{}", tr.t(keys::GRID_PROMPT_INTRO));
    println!("{}", tr.t(keys::GRID_PROMPT_TIP));
    let mut rows = Vec::with_capacity(GRID_SIDE);
    for r in 0..GRID_SIDE {
        let prompt = tr.tf(keys::GRID_PROMPT_ROW, &[("row", (r + 1).to_string())]);
        loop {
            let line = read_line(&prompt)?;
            let parts: Vec<String> = line.split(',').map(normalize_token).collect();
            if parts.len() != GRID_SIDE {
                println!("{}", tr.t(keys::GRID_PROMPT_ROW_INVALID));
                continue;
            }
            rows.push(parts);
            break;
        }
    }
    Ok(FuelGrid::from_rows(rows)?)
}

/// 대화형 보정. 엔터는 기본값을 유지하고, 계산에 실패하면 `default`로 돌아간다.
pub fn calibrate_interactive(
    tr: &Translator,
    catalog: &FuelCatalog,
    default: &Calibration,
) -> Result<Calibration, AppError> {
    let std_ref = CalibrationReference::standard();
    println!("{}", tr.t(keys::CALIB_HEADING));
    println!("{}", tr.t(keys::CALIB_FORMULA));
    println!("{}", tr.t(keys::CALIB_INTRO));

    let fuel_in = read_line(tr.t(keys::CALIB_PROMPT_FUEL))?;
    let fuel = if fuel_in.trim().is_empty() {
        std_ref.fuel
    } else {
        normalize_token(&fuel_in)
    };
    let units = read_f64_or(tr, tr.t(keys::CALIB_PROMPT_UNITS), std_ref.units)?;
    let observed = read_f64_or(tr, tr.t(keys::CALIB_PROMPT_TEMP), std_ref.observed_temp_c)?;

    match Calibration::from_reference(catalog, CalibrationReference::new(fuel, units, observed)) {
        Ok(cal) => {
            println!(
                "{}",
                tr.tf(keys::CALIB_RESULT, &[("k", format!("{:.6}", cal.k))])
            );
            println!("{}", tr.t(keys::CALIB_KEEP));
            Ok(cal)
        }
        Err(e) => {
            warn!(error = %e, "calibration failed; falling back to default coefficient");
            println!(
                "{}",
                tr.tf(
                    keys::CALIB_FAILED,
                    &[("error", e.to_string()), ("k", format!("{:.6}", default.k))]
                )
            );
            Ok(Calibration::fallback(default))
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::UnexpectedEof);
    }
    Ok(buf)
}

/// 빈 입력이면 기본값, 숫자가 아니면 다시 묻는다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
