use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hydrogen_calculator::{
    app, config,
    forms::{PaymentPlanForm, RoiForm},
    hydrogen, i18n, init_tracing, ui_cli,
};

#[derive(Parser, Debug)]
#[command(name = "hydrogen_calculator_cli", version, about = "Hydrogen ROI / payment options calculator")]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// 언어 (auto/en-us/ko-kr)
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// ROI 보고서를 한 번 출력한다
    Roi {
        /// 최장 노선 연간 경유 연료비 ($)
        #[arg(long, default_value_t = 0.0)]
        annual_fuel_cost: f64,
        /// 유닛 가격 ($)
        #[arg(long, default_value_t = 10_000.0)]
        unit_price: f64,
    },
    /// 분할 납부 옵션을 한 번 출력한다
    Plan {
        /// 유닛 가격 ($)
        #[arg(long, default_value_t = 10_000.0)]
        unit_price: f64,
        /// 유닛 수량
        #[arg(long, default_value_t = 1)]
        units: u32,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let mut cfg = match config::load_or_default_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(error = %err, "config unavailable, using defaults");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::info!(language = %lang, base = tr.language_code(), "cli started");

    if let Err(err) = try_run(cli, &mut cfg, &mut tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &mut i18n::Translator) -> Result<(), app::AppError> {
    match cli.command {
        None => app::run(cfg, &cli.config, tr)?,
        Some(Command::Roi {
            annual_fuel_cost,
            unit_price,
        }) => {
            let form = RoiForm {
                annual_fuel_cost,
                unit_price,
            };
            let result = hydrogen::compute_roi(form.to_input());
            print!("{}", ui_cli::render_roi_report(tr, &result));
        }
        Some(Command::Plan { unit_price, units }) => {
            let form = PaymentPlanForm {
                unit_count: units,
                unit_price,
            };
            let plan = hydrogen::compute_payment_plan(form.to_input());
            print!("{}", ui_cli::render_payment_report(tr, &plan));
        }
    }
    Ok(())
}
