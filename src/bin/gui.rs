#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};
use hydrogen_calculator::{
    config,
    format::{
        format_breakeven_with_unit, format_currency, format_down_label, format_total_breakdown,
    },
    forms::{self, PaymentPlanForm, RoiForm},
    hydrogen::{self, SavingsTone},
    i18n, init_tracing,
};

#[derive(Parser, Debug)]
#[command(name = "hydrogen_calculator", version, about = "Hydrogen Calculator (desktop)")]
struct GuiArgs {
    /// 언어 (auto/en-us/ko-kr)
    #[arg(short = 'L', long)]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: std::path::PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let args = GuiArgs::parse();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1000.0, 720.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default_from(&args.config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unavailable, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    let config_path = args.config;
    eframe::run_native(
        "Hydrogen Calculator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            cc.egui_ctx.set_pixels_per_point(app_cfg.ui_scale.clamp(0.8, 1.6));
            Box::new(GuiApp::new(app_cfg.clone(), config_path.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
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

/// 바이너리 폰트 바이트를 egui 기본 폰트 뒤에 폴백으로 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 2) Windows 시스템 폰트 3) 리눅스/맥 CJK 폰트 순.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NotoSansKR-Regular.ttf".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    candidates.push("/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into());
    candidates.push("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into());
    candidates.push("/System/Library/Fonts/AppleSDGothicNeo.ttc".into());

    for p in candidates {
        if p.exists() {
            let bytes =
                fs::read(&p).map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "hangul_font");
            tracing::info!(path = %p.display(), "hangul font loaded");
            return Ok(());
        }
    }
    Err("Hangul font not found; Korean labels may not render.".into())
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 라벨 + 큰 값 형태의 지표 카드.
fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).weak());
        ui.label(egui::RichText::new(value).size(24.0));
    });
    ui.add_space(6.0);
}

/// 순절감액 색: 0 이상 녹색, 음수 적색.
fn tone_color(tone: SavingsTone) -> egui::Color32 {
    match tone {
        SavingsTone::Affirmative => egui::Color32::from_rgb(0, 128, 0),
        SavingsTone::Warning => egui::Color32::from_rgb(255, 0, 0),
    }
}

fn currency_drag(value: &mut f64, min: f64, step: f64) -> egui::DragValue<'_> {
    egui::DragValue::new(value)
        .speed(step)
        .clamp_range(min..=f64::MAX)
        .prefix("$")
        .fixed_decimals(2)
}

struct GuiApp {
    config: config::Config,
    config_path: std::path::PathBuf,
    tr: i18n::Translator,
    lang_input: String,
    save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    // ROI 탭
    roi: RoiForm,
    // 분할 납부 탭 (유닛 가격은 ROI 탭과 별개)
    plan: PaymentPlanForm,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    Roi,
    PaymentOptions,
}

impl GuiApp {
    fn new(config: config::Config, config_path: std::path::PathBuf) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        tracing::info!(language = %lang_code, overrides_loaded = has_overrides, "gui language resolved");
        Self {
            lang_input: config.language.clone(),
            save_status: None,
            tab: Tab::Roi,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: config.ui_scale.clamp(0.8, 1.6),
            always_on_top: config.always_on_top,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            roi: RoiForm::default(),
            plan: PaymentPlanForm::default(),
            config,
            config_path,
            tr,
        }
    }

    /// 설정 모달의 값을 Config에 반영하고 저장한다.
    fn apply_settings(&mut self) -> Result<(), config::ConfigError> {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        self.config.ui_scale = self.ui_scale;
        self.config.always_on_top = self.always_on_top;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.config.save_to(&self.config_path)
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Roi, txt("gui.tab.roi", "ROI Calculator")),
            (
                Tab::PaymentOptions,
                txt("gui.tab.payment", "Payment Options Calculator"),
            ),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch calculator"))
                .clicked()
            {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_roi(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.roi.heading", "ROI Calculator"),
            &txt(
                "gui.roi.tip",
                "Compare diesel fuel spend against the hydrogen unit price.",
            ),
        );
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            cols[0].label(txt(
                "gui.roi.fuel_cost",
                "Annual diesel fuel cost for longest route ($)",
            ));
            cols[0].add(currency_drag(
                &mut self.roi.annual_fuel_cost,
                forms::FUEL_COST_MIN,
                forms::FUEL_COST_STEP,
            ));
            cols[1].label(txt("gui.roi.unit_price", "Unit Price ($)"));
            cols[1].add(currency_drag(
                &mut self.roi.unit_price,
                forms::UNIT_PRICE_MIN,
                forms::UNIT_PRICE_STEP,
            ));
        });
        self.roi.clamp();
        let result = hydrogen::compute_roi(self.roi.to_input());

        ui.add_space(12.0);
        ui.columns(2, |cols| {
            metric(
                &mut cols[0],
                &txt("gui.roi.potential_savings", "Potential annual savings (10%)"),
                &format_currency(result.potential_annual_savings),
            );
            metric(
                &mut cols[0],
                &txt("gui.roi.unit_price_metric", "Unit price"),
                &format_currency(result.unit_price),
            );
            metric(
                &mut cols[1],
                &txt("gui.roi.breakeven", "Break-even time"),
                &format_breakeven_with_unit(result.breakeven, &txt("gui.roi.months", "months")),
            );
        });

        ui.add_space(8.0);
        ui.heading(txt("gui.roi.monthly_heading", "Monthly Cost vs. Savings"));
        ui.columns(2, |cols| {
            metric(
                &mut cols[0],
                &txt("gui.roi.monthly_cost", "Current monthly cost"),
                &format_currency(result.monthly_cost),
            );
            metric(
                &mut cols[1],
                &txt("gui.roi.monthly_savings", "Monthly savings with unit"),
                &format_currency(result.monthly_savings),
            );
        });

        ui.separator();
        ui.label(
            egui::RichText::new(txt(
                "gui.roi.net_savings",
                "Potential net savings over next 4 years",
            ))
            .size(20.0)
            .strong(),
        );
        ui.label(
            egui::RichText::new(format_currency(result.four_year_net_savings))
                .size(32.0)
                .strong()
                .color(tone_color(result.tone())),
        );
    }

    fn ui_payment_options(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.payment.heading", "Payment Options Calculator"),
            &txt(
                "gui.payment.tip",
                "Down payment followed by 11 equal monthly payments.",
            ),
        );
        ui.add_space(8.0);
        ui.strong(txt("gui.payment.config_heading", "Unit Configuration"));

        ui.columns(3, |cols| {
            cols[0].label(txt("gui.payment.unit_count", "Number of Units"));
            cols[0].add(
                egui::DragValue::new(&mut self.plan.unit_count)
                    .speed(forms::UNIT_COUNT_STEP as f64)
                    .clamp_range(forms::UNIT_COUNT_MIN..=u32::MAX),
            );
            cols[1].label(txt("gui.payment.unit_price", "Unit Price ($)"));
            cols[1].add(currency_drag(
                &mut self.plan.unit_price,
                forms::UNIT_PRICE_MIN,
                forms::UNIT_PRICE_STEP,
            ));
            let input = self.plan.to_input();
            let total_cost = hydrogen::compute_total_cost(input.unit_price, input.unit_count);
            metric(
                &mut cols[2],
                &txt("gui.payment.total_cost", "Total Cost"),
                &format_currency(total_cost),
            );
        });
        self.plan.clamp();
        let plan = hydrogen::compute_payment_plan(self.plan.to_input());

        ui.add_space(12.0);
        ui.strong(txt("gui.payment.options_heading", "Payment Options"));
        ui.columns(3, |cols| {
            for (col, option) in cols.iter_mut().zip(plan.options.iter()) {
                egui::Frame::group(col.style()).show(col, |ui| {
                    ui.heading(&option.label);
                    ui.strong(format_down_label(option.down_percent));
                    ui.label(format!(
                        "{}: {}",
                        txt("gui.payment.initial_down", "Initial Down Payment"),
                        format_currency(option.down_amount)
                    ));
                    ui.label(format!(
                        "{}: {}",
                        txt("gui.payment.monthly", "11 Monthly Payments"),
                        format_currency(option.monthly_payment)
                    ));
                    ui.separator();
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}: {}",
                                txt("gui.payment.total_payment", "Total Payment"),
                                format_total_breakdown(option, plan.total_cost)
                            ))
                            .small(),
                        )
                        .wrap(true),
                    );
                });
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Hydrogen Calculator"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = true;
            let mut save_clicked = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        save_clicked = true;
                    }
                    if let Some(msg) = &self.save_status {
                        ui.label(msg);
                    }
                });
            if save_clicked {
                self.save_status = Some(match self.apply_settings() {
                    Ok(()) => txt("gui.settings.saved", "Saved."),
                    Err(e) => {
                        tracing::warn!(error = %e, "settings save failed");
                        format!("{}: {e}", txt("gui.settings.save_error", "Save error"))
                    }
                });
            }
            self.show_settings_modal = open;
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Hydrogen unit ROI and payment options calculator",
                    ));
                    ui.label(format!(
                        "{} {}",
                        txt("gui.about.version", "Version:"),
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.inputs",
                        "- Fuel cost minimum $0, unit price minimum $1,000, at least 1 unit.",
                    ));
                    ui.label(txt(
                        "gui.about.infinite",
                        "- Break-even shows ∞ when there are no fuel savings.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.formula.roi", "ROI"));
                    ui.label(txt("gui.formula.savings", "Annual savings = annual fuel cost × 10%"));
                    ui.label(txt(
                        "gui.formula.breakeven",
                        "Break-even [months] = unit price / annual savings × 12",
                    ));
                    ui.label(txt(
                        "gui.formula.net",
                        "4-year net savings = annual savings × 4 − unit price",
                    ));
                    ui.separator();
                    ui.heading(txt("gui.formula.payment", "Payment options"));
                    ui.label(txt("gui.formula.total", "Total cost = unit price × units"));
                    ui.label(txt(
                        "gui.formula.down",
                        "Down payment = total × 50% / 25% / 15%",
                    ));
                    ui.label(txt(
                        "gui.formula.monthly",
                        "Monthly payment = (total − down payment) / 11",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(220.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Roi => self.ui_roi(ui),
                    Tab::PaymentOptions => self.ui_payment_options(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(
            config::Config::default(),
            std::env::temp_dir().join("hydrogen_calculator_gui_test.toml"),
        )
    }

    #[test]
    fn new_app_starts_on_roi_with_widget_defaults() {
        let app = app();
        assert_eq!(app.tab, Tab::Roi);
        assert_eq!(app.roi.annual_fuel_cost, 0.0);
        assert_eq!(app.roi.unit_price, 10_000.0);
        assert_eq!(app.plan.unit_count, 1);
        assert_eq!(app.plan.unit_price, 10_000.0);
    }

    #[test]
    fn unit_prices_are_independent_between_tabs() {
        let mut app = app();
        app.roi.unit_price = 55_000.0;
        assert_eq!(app.plan.unit_price, 10_000.0);
    }

    #[test]
    fn window_alpha_is_clamped_from_config() {
        let cfg = config::Config {
            window_alpha: 0.05,
            ..Default::default()
        };
        let app = GuiApp::new(cfg, std::env::temp_dir().join("unused.toml"));
        assert!((app.window_alpha - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn net_savings_colors() {
        assert_eq!(tone_color(SavingsTone::Affirmative), egui::Color32::from_rgb(0, 128, 0));
        assert_eq!(tone_color(SavingsTone::Warning), egui::Color32::from_rgb(255, 0, 0));
    }
}
