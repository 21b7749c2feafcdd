use std::io::{self, Write};

use colored::Colorize;

use crate::app::AppError;
use crate::config::Config;
use crate::format::{
    format_breakeven_with_unit, format_currency, format_down_label, format_total_breakdown,
};
use crate::forms::{
    PaymentPlanForm, RoiForm, FUEL_COST_MIN, UNIT_COUNT_MIN, UNIT_PRICE_MIN,
};
use crate::hydrogen::{self, PaymentPlan, RoiResult, SavingsTone};
use crate::i18n::{fill_template, keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Roi,
    PaymentOptions,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ROI));
    println!("{}", tr.t(keys::MAIN_MENU_PAYMENT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Roi),
        "2" => Some(MenuChoice::PaymentOptions),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// ROI 메뉴를 처리한다.
pub fn handle_roi(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROI_HEADING));
    let defaults = RoiForm::default();
    let form = RoiForm {
        annual_fuel_cost: read_f64_at_least(
            tr,
            keys::PROMPT_ANNUAL_FUEL_COST,
            defaults.annual_fuel_cost,
            FUEL_COST_MIN,
        )?,
        unit_price: read_f64_at_least(tr, keys::PROMPT_UNIT_PRICE, defaults.unit_price, UNIT_PRICE_MIN)?,
    };
    let result = hydrogen::compute_roi(form.to_input());
    print!("{}", render_roi_report(tr, &result));
    Ok(())
}

/// 분할 납부 메뉴를 처리한다.
pub fn handle_payment_options(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PAYMENT_HEADING));
    println!("{}", tr.t(keys::PAYMENT_CONFIG_HEADING));
    let defaults = PaymentPlanForm::default();
    let form = PaymentPlanForm {
        unit_count: read_u32_at_least(tr, keys::PROMPT_UNIT_COUNT, defaults.unit_count, UNIT_COUNT_MIN)?,
        unit_price: read_f64_at_least(tr, keys::PROMPT_UNIT_PRICE, defaults.unit_price, UNIT_PRICE_MIN)?,
    };
    let plan = hydrogen::compute_payment_plan(form.to_input());
    print!("{}", render_payment_report(tr, &plan));
    Ok(())
}

/// 설정 메뉴를 처리한다. 설정이 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(false);
    }
    let language = match sel.trim() {
        "1" => "auto",
        "2" => "en-us",
        "3" => "ko-kr",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = language.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(true)
}

/// ROI 결과 보고서. 순절감액은 부호에 따라 녹색/적색으로 표시한다.
pub fn render_roi_report(tr: &Translator, result: &RoiResult) -> String {
    let net = format_currency(result.four_year_net_savings);
    let net = match result.tone() {
        SavingsTone::Affirmative => net.as_str().green().bold(),
        SavingsTone::Warning => net.as_str().red().bold(),
    };
    let mut out = String::new();
    out.push_str(&metric_line(
        &tr.t(keys::ROI_POTENTIAL_SAVINGS),
        &format_currency(result.potential_annual_savings),
    ));
    out.push_str(&metric_line(&tr.t(keys::ROI_UNIT_PRICE), &format_currency(result.unit_price)));
    out.push_str(&metric_line(
        &tr.t(keys::ROI_BREAKEVEN),
        &format_breakeven_with_unit(result.breakeven, &tr.t(keys::ROI_MONTHS)),
    ));
    out.push_str(&format!("\n{}\n", tr.t(keys::ROI_MONTHLY_HEADING)));
    out.push_str(&metric_line(&tr.t(keys::ROI_MONTHLY_COST), &format_currency(result.monthly_cost)));
    out.push_str(&metric_line(
        &tr.t(keys::ROI_MONTHLY_SAVINGS),
        &format_currency(result.monthly_savings),
    ));
    out.push_str("---\n");
    out.push_str(&format!("{}\n{net}\n", tr.t(keys::ROI_NET_SAVINGS)));
    out
}

/// 분할 납부 보고서.
pub fn render_payment_report(tr: &Translator, plan: &PaymentPlan) -> String {
    let mut out = String::new();
    out.push_str(&metric_line(&tr.t(keys::PAYMENT_TOTAL_COST), &format_currency(plan.total_cost)));
    out.push_str(&format!("\n{}\n", tr.t(keys::PAYMENT_OPTIONS_HEADING)));
    for option in &plan.options {
        out.push_str(&format!("\n### {}\n", option.label));
        out.push_str(&format!("{}\n", format_down_label(option.down_percent)));
        out.push_str(&metric_line(
            &tr.t(keys::PAYMENT_INITIAL_DOWN),
            &format_currency(option.down_amount),
        ));
        out.push_str(&metric_line(
            &tr.t(keys::PAYMENT_MONTHLY),
            &format_currency(option.monthly_payment),
        ));
        out.push_str(&format!(
            "{}: {}\n",
            tr.t(keys::PAYMENT_TOTAL_PAYMENT),
            format_total_breakdown(option, plan.total_cost)
        ));
    }
    out
}

fn metric_line(label: &str, value: &str) -> String {
    format!("{label}: {value}\n")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 빈 입력은 기본값, 최소값 미만은 최소값으로 올린다.
fn read_f64_at_least(tr: &Translator, key: &str, default: f64, min: f64) -> Result<f64, AppError> {
    let prompt = fill_template(&tr.t(key), &[("default", format!("{default:.2}"))]);
    loop {
        let s = read_line(&prompt)?;
        match parse_f64_input(&s, default) {
            Some(v) => return Ok(report_clamp(tr, v, min, v.max(min), |x| format!("{x:.2}"))),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_at_least(tr: &Translator, key: &str, default: u32, min: u32) -> Result<u32, AppError> {
    let prompt = fill_template(&tr.t(key), &[("default", default.to_string())]);
    loop {
        let s = read_line(&prompt)?;
        match parse_u32_input(&s, default) {
            Some(v) => return Ok(report_clamp(tr, v, min, v.max(min), |x| x.to_string())),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn report_clamp<T: PartialOrd + Copy>(
    tr: &Translator,
    raw: T,
    min: T,
    clamped: T,
    show: impl Fn(T) -> String,
) -> T {
    if raw < min {
        println!(
            "{}",
            fill_template(
                &tr.t(keys::NOTE_VALUE_CLAMPED),
                &[("min", show(min)), ("value", show(clamped))],
            )
        );
    }
    clamped
}

/// `$`와 천 단위 구분자를 허용한다. 빈 입력은 기본값.
fn parse_f64_input(s: &str, default: f64) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    if cleaned.is_empty() {
        return Some(default);
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_u32_input(s: &str, default: u32) -> Option<u32> {
    let t = s.trim();
    if t.is_empty() {
        return Some(default);
    }
    t.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrogen::{compute_payment_plan, compute_roi, PaymentPlanInput, RoiInput};

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(parse_menu_choice(" 1\n"), Some(MenuChoice::Roi));
        assert_eq!(parse_menu_choice("2"), Some(MenuChoice::PaymentOptions));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }

    #[test]
    fn numeric_input_accepts_currency_text() {
        assert_eq!(parse_f64_input("$12,500\n", 0.0), Some(12_500.0));
        assert_eq!(parse_f64_input("   \n", 10_000.0), Some(10_000.0));
        assert_eq!(parse_f64_input("abc", 0.0), None);
        assert_eq!(parse_f64_input("inf", 0.0), None);
        assert_eq!(parse_u32_input("3\n", 1), Some(3));
        assert_eq!(parse_u32_input("", 1), Some(1));
        assert_eq!(parse_u32_input("-2", 1), None);
    }

    #[test]
    fn roi_report_shows_infinity_for_zero_fuel_cost() {
        colored::control::set_override(false);
        let tr = Translator::new("en");
        let result = compute_roi(RoiInput {
            annual_fuel_cost: 0.0,
            unit_price: 10_000.0,
        });
        let report = render_roi_report(&tr, &result);
        assert!(report.contains("Break-even time: ∞"));
        assert!(report.contains("$-10,000.00"));
    }

    #[test]
    fn payment_report_lists_options_in_order() {
        let tr = Translator::new("en");
        let plan = compute_payment_plan(PaymentPlanInput {
            unit_count: 2,
            unit_price: 20_000.0,
        });
        let report = render_payment_report(&tr, &plan);
        let first = report.find("Option 1").expect("option 1");
        let third = report.find("Option 3").expect("option 3");
        assert!(first < third);
        assert!(report.contains("50% Down"));
        assert!(report.contains("Total Payment: $20,000.00 + (11 × $1,818.18) = $40,000.00"));
    }
}
