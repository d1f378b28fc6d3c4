use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const YES: &str = "general.yes";
    pub const NO: &str = "general.no";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_MISSING_CO2: &str = "error.missing_co2";
    pub const ERROR_MISSING_GRID: &str = "error.missing_grid";

    pub const FUEL_LIST_HEADING: &str = "fuel_list.heading";
    pub const FUEL_LIST_EMPTY_HINT: &str = "fuel_list.empty_hint";

    pub const GRID_PROMPT_INTRO: &str = "grid_prompt.intro";
    pub const GRID_PROMPT_TIP: &str = "grid_prompt.tip";
    pub const GRID_PROMPT_ROW: &str = "grid_prompt.row";
    pub const GRID_PROMPT_ROW_INVALID: &str = "grid_prompt.row_invalid";

    pub const CALIB_HEADING: &str = "calibration.heading";
    pub const CALIB_FORMULA: &str = "calibration.formula";
    pub const CALIB_INTRO: &str = "calibration.intro";
    pub const CALIB_PROMPT_FUEL: &str = "calibration.prompt_fuel";
    pub const CALIB_PROMPT_UNITS: &str = "calibration.prompt_units";
    pub const CALIB_PROMPT_TEMP: &str = "calibration.prompt_temp";
    pub const CALIB_FAILED: &str = "calibration.failed";
    pub const CALIB_RESULT: &str = "calibration.result";
    pub const CALIB_KEEP: &str = "calibration.keep";

    pub const REPORT_GRID_HEADING: &str = "report.grid_heading";
    pub const REPORT_FUEL_MIX: &str = "report.fuel_mix";
    pub const REPORT_RESULTS_HEADING: &str = "report.results_heading";
    pub const REPORT_CO2: &str = "report.co2";
    pub const REPORT_OPERATIONAL: &str = "report.operational";
    pub const REPORT_BASE_PRESSURE: &str = "report.base_pressure";
    pub const REPORT_TOTAL_HEAT: &str = "report.total_heat";
    pub const REPORT_K: &str = "report.k";
    pub const REPORT_K_SOURCE: &str = "report.k_source";
    pub const REPORT_TEMPERATURE: &str = "report.temperature";
    pub const REPORT_ADDED_PRESSURE: &str = "report.added_pressure";
    pub const REPORT_TOTAL_PRESSURE: &str = "report.total_pressure";
    pub const REPORT_MARGIN: &str = "report.margin";
    pub const REPORT_EXPLOSION: &str = "report.explosion";

    pub const K_SOURCE_DEFAULT: &str = "k_source.default";
    pub const K_SOURCE_REFERENCE: &str = "k_source.reference";
    pub const K_SOURCE_OVERRIDE: &str = "k_source.override";
    pub const K_SOURCE_FALLBACK: &str = "k_source.fallback";

    pub const NOTE_NOT_OPERATIONAL: &str = "note.not_operational";
    pub const NOTE_EXPLOSION: &str = "note.explosion";
    pub const NOTE_BEYOND_SCHEDULE: &str = "note.beyond_schedule";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 locales/ 와 내장 언어팩 순으로 찾는다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 언어팩에서 키를 조회한다. 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        }
        .unwrap_or("[missing translation]")
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }

    pub fn yes_no(&self, value: bool) -> &str {
        self.t(if value { keys::YES } else { keys::NO })
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(GUI 문구). 영어 GUI 문구는 코드의 기본값을 쓴다.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko.toml")),
        Language::En => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        YES => "예",
        NO => "아니오",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_MISSING_CO2 => "--co2-mb 값이 필요합니다 (--list-fuels 제외).",
        ERROR_MISSING_GRID => "--interactive 또는 --slots (16개 값) 중 하나를 지정하세요.",
        FUEL_LIST_HEADING => "\n사용 가능한 연료 키:",
        FUEL_LIST_EMPTY_HINT => "\n빈 슬롯은 'empty'를 사용합니다.",
        GRID_PROMPT_INTRO => "\n4x4 그리드를 입력합니다. 연료 키 또는 'empty'를 사용하세요.",
        GRID_PROMPT_TIP => "팁: --list-fuels 로 전체 키를 볼 수 있습니다.\n",
        GRID_PROMPT_ROW => "{row}행 (쉼표로 구분한 4개 값): ",
        GRID_PROMPT_ROW_INVALID => "  정확히 4개 값을 입력하세요.",
        CALIB_HEADING => "\n=== 보정 (발열량 -> 온도) ===",
        CALIB_FORMULA => "사용 식: T = 20 + k * (총 발열량)",
        CALIB_INTRO => "게임에서 확인한 기준 배치가 있으면 입력해 k를 계산합니다.\n없으면 엔터를 눌러 기본값을 유지합니다.\n",
        CALIB_PROMPT_FUEL => "기준 연료 키 (기본 uranium_fuel): ",
        CALIB_PROMPT_UNITS => "기준 연료봉 개수 (기본 16): ",
        CALIB_PROMPT_TEMP => "관측한 안정 노심 온도 °C (기본 240): ",
        CALIB_FAILED => "\n보정 실패 ({error}). 기본 k={k} 값을 사용합니다.\n",
        CALIB_RESULT => "\n계산된 k = {k} (°C / 발열량)",
        CALIB_KEEP => "이번 실행 동안 이 k를 사용합니다.\n",
        REPORT_GRID_HEADING => "\n=== ZIRNOX 4x4 그리드 ===",
        REPORT_FUEL_MIX => "연료 구성",
        REPORT_RESULTS_HEADING => "\n=== 결과 ===",
        REPORT_CO2 => "CO2 (mB)",
        REPORT_OPERATIONAL => "운전 가능 (CO2>=5000?)",
        REPORT_BASE_PRESSURE => "기본 압력",
        REPORT_TOTAL_HEAT => "총 발열량",
        REPORT_K => "k (°C / 발열량)",
        REPORT_K_SOURCE => "k 출처",
        REPORT_TEMPERATURE => "노심 온도",
        REPORT_ADDED_PRESSURE => "추가 압력",
        REPORT_TOTAL_PRESSURE => "총 압력",
        REPORT_MARGIN => "폭발까지 여유",
        REPORT_EXPLOSION => "폭발 (>=31 bar?)",
        K_SOURCE_DEFAULT => "기본 기준점 (uranium_fuel x16 -> 240 °C)",
        K_SOURCE_REFERENCE => "보정 기준점 ({fuel} x{units} -> {temp} °C)",
        K_SOURCE_OVERRIDE => "직접 지정",
        K_SOURCE_FALLBACK => "기본값 (보정 실패)",
        NOTE_NOT_OPERATIONAL => "참고: CO2가 5000 mB 미만이라 원자로가 동작하지 않는 것으로 봅니다.",
        NOTE_EXPLOSION => "참고: 총 압력이 31 bar 이상이므로 폭발합니다.",
        NOTE_BEYOND_SCHEDULE => "참고: 노심 온도가 압력 구간표 상한({max} °C)을 넘어 추가 압력을 마지막 값으로 고정했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        YES => "YES",
        NO => "NO",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_MISSING_CO2 => "--co2-mb is required (unless using --list-fuels).",
        ERROR_MISSING_GRID => "provide --interactive or --slots (16 values).",
        FUEL_LIST_HEADING => "\nFuel keys you can use:",
        FUEL_LIST_EMPTY_HINT => "\nUse 'empty' for blank slots.",
        GRID_PROMPT_INTRO => "\nEnter your 4x4 grid. Use fuel keys or 'empty'.",
        GRID_PROMPT_TIP => "Tip: run with --list-fuels to see all keys.\n",
        GRID_PROMPT_ROW => "Row {row} (4 values, comma-separated): ",
        GRID_PROMPT_ROW_INVALID => "  Please enter exactly 4 values.",
        CALIB_HEADING => "\n=== Calibration (heat -> temperature) ===",
        CALIB_FORMULA => "Formula: T = 20 + k * (total_heat)",
        CALIB_INTRO => "Enter a known setup from the game to compute k.\nOtherwise just press Enter to keep the default.\n",
        CALIB_PROMPT_FUEL => "Fuel key for reference (default uranium_fuel): ",
        CALIB_PROMPT_UNITS => "Number of rods for reference (default 16): ",
        CALIB_PROMPT_TEMP => "Observed stabilized core temp in C (default 240): ",
        CALIB_FAILED => "\nCalibration failed ({error}). Falling back to default k={k}\n",
        CALIB_RESULT => "\nComputed k = {k} (C per heat unit)",
        CALIB_KEEP => "This k is used for the rest of this run.\n",
        REPORT_GRID_HEADING => "\n=== ZIRNOX 4x4 Grid ===",
        REPORT_FUEL_MIX => "Fuel mix",
        REPORT_RESULTS_HEADING => "\n=== Results ===",
        REPORT_CO2 => "CO2 (mB)",
        REPORT_OPERATIONAL => "Operational (CO2>=5000?)",
        REPORT_BASE_PRESSURE => "Base pressure",
        REPORT_TOTAL_HEAT => "Total heat",
        REPORT_K => "k (C per heat)",
        REPORT_K_SOURCE => "k source",
        REPORT_TEMPERATURE => "Core temperature",
        REPORT_ADDED_PRESSURE => "Added pressure",
        REPORT_TOTAL_PRESSURE => "TOTAL pressure",
        REPORT_MARGIN => "Margin to explosion",
        REPORT_EXPLOSION => "Explosion (>=31 bar?)",
        K_SOURCE_DEFAULT => "default reference (uranium_fuel x16 -> 240 C)",
        K_SOURCE_REFERENCE => "calibrated ({fuel} x{units} -> {temp} C)",
        K_SOURCE_OVERRIDE => "override",
        K_SOURCE_FALLBACK => "default (calibration failed)",
        NOTE_NOT_OPERATIONAL => "Note: the reactor is not operational because CO2 < 5000 mB.",
        NOTE_EXPLOSION => "Note: Total pressure hit 31 bar or more, so this would blow up.",
        NOTE_BEYOND_SCHEDULE => "Note: core temperature is beyond the pressure schedule ({max} C); added pressure is clamped.",
        _ => return None,
    })
}
