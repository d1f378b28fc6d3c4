#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing::warn;
use zirnox_reactor_toolbox::{
    app, config, i18n,
    reactor::{
        Calibration, CalibrationReference, EvaluationResult, FuelCatalog, FuelGrid, ReactorError,
        EMPTY_FUEL, GRID_SIDE, GRID_SLOTS,
    },
    report,
    units::{PressureUnit, TemperatureUnit},
};

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1100.0, 720.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    // 설정을 못 읽으면 기본값으로 창은 띄우되, 오류를 화면에 표시하고 설정값 기반 계산은 막는다.
    let (mut app_cfg, config_error) = match config::load_or_default() {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            warn!(error = %e, "config unavailable");
            (config::Config::default(), Some(e.to_string()))
        }
    };
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "ZIRNOX Reactor Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), config_error.clone()))
        }),
    )
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["zirnox.png", "icon.png", "assets/icon.png", "../zirnox.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다. assets/fonts → Windows 시스템 폰트 → 리눅스 CJK 폰트 순.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![Path::new("assets/fonts/malgun.ttf").to_path_buf()];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ]
        .iter()
        .map(|p| Path::new(p).to_path_buf()),
    );
    let path = candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; using default font.".to_string())?;
    let bytes = fs::read(&path)
        .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// k 결정 방식.
#[derive(Clone, Copy, PartialEq, Eq)]
enum KMode {
    /// 설정 파일 값 (없으면 내장 기준점)
    Configured,
    /// 화면에서 입력한 기준점으로 보정
    Reference,
    /// 직접 지정
    Override,
}

/// 마지막 계산 결과와 내보내기용 보고서.
struct Outcome {
    result: EvaluationResult,
    calibration: Calibration,
    report: String,
}

struct GuiApp {
    config: config::Config,
    /// 시작 시 설정 파일 로드 실패 메시지
    config_error: Option<String>,
    tr: i18n::Translator,
    catalog: FuelCatalog,
    lang_input: String,
    lang_pack_dir_input: String,
    settings_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    co2_mb: f64,
    grid: FuelGrid,
    fill_choice: String,
    k_mode: KMode,
    ref_fuel: String,
    ref_units: f64,
    ref_temp: f64,
    k_override: f64,
    outcome: Option<Result<Outcome, String>>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_error: Option<String>) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::debug!(lang = %lang_code, "gui language resolved");
        let reference = config.calibration.clone().unwrap_or_default();
        let catalog = FuelCatalog::standard();
        let k_override = config
            .coefficient
            .or_else(|| Calibration::standard(&catalog).ok().map(|c| c.k))
            .unwrap_or_default();
        Self {
            lang_input: config.language.clone(),
            lang_pack_dir_input: config.language_pack_dir.clone().unwrap_or_default(),
            settings_status: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            show_settings_modal: false,
            show_help_modal: false,
            co2_mb: 16_000.0,
            grid: FuelGrid::filled("uranium_fuel"),
            fill_choice: "uranium_fuel".into(),
            k_mode: KMode::Configured,
            ref_fuel: reference.fuel,
            ref_units: reference.units,
            ref_temp: reference.observed_temp_c,
            k_override,
            outcome: None,
            export_status: None,
            catalog,
            config,
            config_error,
            tr,
        }
    }

    fn calibration(&self) -> Result<Calibration, ReactorError> {
        match self.k_mode {
            KMode::Configured => app::configured_calibration(&self.config, &self.catalog),
            KMode::Reference => Calibration::from_reference(
                &self.catalog,
                CalibrationReference::new(self.ref_fuel.clone(), self.ref_units, self.ref_temp),
            ),
            KMode::Override => Calibration::from_override(self.k_override),
        }
    }

    fn evaluate(&self) -> Result<Outcome, ReactorError> {
        let model = self.config.model()?;
        let calibration = self.calibration()?;
        let result = model.evaluate(self.co2_mb, self.grid.slots(), calibration.k)?;
        let report = report::render_report(
            &self.tr,
            &self.config.display,
            &self.grid,
            &result,
            &calibration,
            &model.schedule,
        );
        Ok(Outcome {
            result,
            calibration,
            report,
        })
    }

    fn recalculate(&mut self) {
        self.outcome = Some(match &self.config_error {
            Some(msg) => Err(msg.clone()),
            None => self.evaluate().map_err(|e| e.to_string()),
        });
        self.export_status = None;
    }

    fn export_report(&mut self, report: String) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("zirnox_report.txt")
            .save_file()
        else {
            return;
        };
        self.export_status = Some(match fs::write(&path, report) {
            Ok(()) => i18n::fill_template(
                &txt("gui.export.saved", "Report saved: {path}"),
                &[("path", path.display().to_string())],
            ),
            Err(e) => format!("{}: {e}", txt("gui.export.error", "Save error")),
        });
    }

    fn ui_fuel_list(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.fuels.heading", "Fuels"),
            &txt("gui.fuels.tip", "Heat per rod and lifetime in ticks."),
        );
        ui.separator();
        egui::Grid::new("fuel_table")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(txt("gui.fuels.id", "Key"));
                ui.strong(txt("gui.fuels.heat", "Heat"));
                ui.strong(txt("gui.fuels.lifetime", "Lifetime"));
                ui.end_row();
                for f in self.catalog.sorted() {
                    ui.label(f.id).on_hover_text(f.display);
                    ui.label(format!("{}", f.heat));
                    ui.label(report::group_thousands(f.lifetime_ticks));
                    ui.end_row();
                }
            });
    }

    fn ui_grid(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let fuel_ids: Vec<&'static str> = self.catalog.sorted().iter().map(|f| f.id).collect();

        heading_with_tip(
            ui,
            &txt("gui.grid.heading", "4x4 fuel grid"),
            &txt("gui.grid.tip", "Choose a fuel for each slot; use 'empty' for blank slots."),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("fuel_grid")
                .num_columns(GRID_SIDE)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for index in 0..GRID_SLOTS {
                        let mut current = self.grid.slots()[index].clone();
                        egui::ComboBox::from_id_source(("slot", index))
                            .width(130.0)
                            .selected_text(current.as_str())
                            .show_ui(ui, |ui| {
                                for id in &fuel_ids {
                                    ui.selectable_value(&mut current, id.to_string(), *id);
                                }
                            });
                        if current != self.grid.slots()[index] {
                            self.grid.set_slot(index, &current);
                        }
                        if index % GRID_SIDE == GRID_SIDE - 1 {
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("fill_choice")
                    .selected_text(self.fill_choice.as_str())
                    .show_ui(ui, |ui| {
                        for id in &fuel_ids {
                            ui.selectable_value(&mut self.fill_choice, id.to_string(), *id);
                        }
                    });
                if ui.button(txt("gui.grid.fill", "Fill all")).clicked() {
                    self.grid = FuelGrid::filled(&self.fill_choice);
                }
                if ui.button(txt("gui.grid.clear", "Clear")).clicked() {
                    self.grid = FuelGrid::filled(EMPTY_FUEL);
                }
            });
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("input_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.input.co2", "CO2 (mB)"),
                        &txt("gui.input.co2_tip", "Below 5000 mB the reactor is not operational."),
                    );
                    ui.add(
                        egui::DragValue::new(&mut self.co2_mb)
                            .speed(100.0)
                            .clamp_range(0.0..=f64::MAX),
                    );
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.input.k_mode", "Coefficient k"),
                        &txt("gui.input.k_mode_tip", "T = 20 + k * total_heat"),
                    );
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut self.k_mode,
                            KMode::Configured,
                            txt("gui.input.k_configured", "Settings"),
                        );
                        ui.selectable_value(
                            &mut self.k_mode,
                            KMode::Reference,
                            txt("gui.input.k_reference", "Calibrate"),
                        );
                        ui.selectable_value(
                            &mut self.k_mode,
                            KMode::Override,
                            txt("gui.input.k_override", "Override"),
                        );
                    });
                    ui.end_row();

                    match self.k_mode {
                        KMode::Configured => {}
                        KMode::Reference => {
                            ui.label(txt("gui.input.ref_fuel", "Reference fuel"));
                            egui::ComboBox::from_id_source("ref_fuel")
                                .selected_text(self.ref_fuel.as_str())
                                .show_ui(ui, |ui| {
                                    for f in self.catalog.sorted() {
                                        ui.selectable_value(&mut self.ref_fuel, f.id.to_string(), f.id);
                                    }
                                });
                            ui.end_row();
                            ui.label(txt("gui.input.ref_units", "Rods"));
                            ui.add(egui::DragValue::new(&mut self.ref_units).speed(1.0));
                            ui.end_row();
                            ui.label(txt("gui.input.ref_temp", "Observed temp (°C)"));
                            ui.add(egui::DragValue::new(&mut self.ref_temp).speed(1.0));
                            ui.end_row();
                        }
                        KMode::Override => {
                            ui.label("k");
                            ui.add(egui::DragValue::new(&mut self.k_override).speed(0.001));
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.input.run", "Calculate")).clicked() {
                self.recalculate();
            }
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut export: Option<String> = None;
        match &self.outcome {
            None => {
                ui.small(txt("gui.result.empty", "Press Calculate to evaluate the grid."));
            }
            Some(Err(msg)) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {msg}", tr.t(i18n::keys::ERROR_PREFIX)),
                );
            }
            Some(Ok(outcome)) => {
                let r = &outcome.result;
                let (verdict, color) = if r.explodes {
                    (txt("gui.result.boom", "EXPLODES"), egui::Color32::RED)
                } else {
                    (txt("gui.result.safe", "Holds"), egui::Color32::GREEN)
                };
                ui.label(egui::RichText::new(verdict).heading().color(color));
                ui.label(format!(
                    "{}: {}",
                    tr.t(i18n::keys::REPORT_K_SOURCE),
                    report::describe_source(&tr, &outcome.calibration)
                ));
                ui.add(
                    egui::ProgressBar::new(
                        (r.total_pressure_bar / zirnox_reactor_toolbox::reactor::EXPLOSION_THRESHOLD_BAR)
                            .clamp(0.0, 1.0) as f32,
                    )
                    .text(format!("{:.3} / 31 bar", r.total_pressure_bar)),
                );
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_source("report_scroll")
                    .max_height(360.0)
                    .show(ui, |ui| {
                        ui.monospace(outcome.report.as_str());
                    });
                if ui.button(txt("gui.export.button", "Export report...")).clicked() {
                    export = Some(outcome.report.clone());
                }
            }
        }
        if let Some(report) = export {
            self.export_report(report);
        }
        if let Some(msg) = &self.export_status {
            ui.small(msg);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "ZIRNOX Reactor Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
            if let Some(msg) = &self.config_error {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {msg}", txt("gui.config.load_error", "Config error")),
                );
            }
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut display = self.config.display;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.units", "Display units"));
                    ui.horizontal(|ui| {
                        for unit in [
                            PressureUnit::Bar,
                            PressureUnit::KiloPascal,
                            PressureUnit::Psi,
                            PressureUnit::Atm,
                        ] {
                            ui.selectable_value(&mut display.pressure, unit, unit.symbol());
                        }
                    });
                    ui.horizontal(|ui| {
                        for unit in [
                            TemperatureUnit::Celsius,
                            TemperatureUnit::Kelvin,
                            TemperatureUnit::Fahrenheit,
                        ] {
                            ui.selectable_value(&mut display.temperature, unit, unit.symbol());
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), txt("gui.settings.lang_auto", "System"));
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        });
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.pack_dir", "Language pack folder"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                        if ui.button("...").clicked() {
                            if let Some(dir) = FileDialog::new().pick_folder() {
                                self.lang_pack_dir_input = dir.display().to_string();
                            }
                        }
                    });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir = Some(self.lang_pack_dir_input.trim().to_string())
                            .filter(|s| !s.is_empty());
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
                        self.settings_status = Some(match self.config.save() {
                            Ok(()) => {
                                // 깨진 파일을 현재 설정으로 덮어썼으므로 오류 상태를 푼다.
                                self.config_error = None;
                                txt("gui.settings.saved", "Saved.")
                            }
                            Err(e) => format!("Save error: {e}"),
                        });
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg);
                    }
                });
            if display != self.config.display {
                self.config.display = display;
                if self.outcome.is_some() {
                    self.recalculate();
                }
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.about.app", "ZIRNOX fuel grid calculator (HBM NTM)"));
                    ui.separator();
                    ui.label(txt("gui.about.heat", "Total heat = sum of the heat of the 16 slots."));
                    ui.label(txt("gui.about.temp", "Core temperature: T = 20 + k * total_heat."));
                    ui.label(txt("gui.about.base", "Base pressure comes from the CO2 step table (0-20 bar)."));
                    ui.label(txt("gui.about.added", "Added pressure accumulates piecewise from 20 °C to 500 °C (max 21 bar)."));
                    ui.label(txt("gui.about.boom", "Total pressure at or above 31 bar explodes."));
                });
        }

        egui::SidePanel::left("fuels")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_fuel_list(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_grid(ui);
                    ui.add_space(8.0);
                    self.ui_inputs(ui);
                    ui.add_space(8.0);
                    self.ui_results(ui);
                });
        });
    }
}
