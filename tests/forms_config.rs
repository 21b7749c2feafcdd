use hydrogen_calculator::config::Config;
use hydrogen_calculator::forms::{PaymentPlanForm, RoiForm};

#[test]
fn form_defaults_match_widgets() {
    let roi = RoiForm::default();
    assert_eq!(roi.annual_fuel_cost, 0.0);
    assert_eq!(roi.unit_price, 10_000.0);
    let plan = PaymentPlanForm::default();
    assert_eq!(plan.unit_count, 1);
    assert_eq!(plan.unit_price, 10_000.0);
}

#[test]
fn roi_form_clamps_to_minimums() {
    let mut form = RoiForm {
        annual_fuel_cost: -50.0,
        unit_price: 10.0,
    };
    form.clamp();
    assert_eq!(form.annual_fuel_cost, 0.0);
    assert_eq!(form.unit_price, 1000.0);
}

#[test]
fn non_finite_values_fall_back_to_defaults() {
    let input = RoiForm {
        annual_fuel_cost: f64::NAN,
        unit_price: f64::INFINITY,
    }
    .to_input();
    assert_eq!(input.annual_fuel_cost, 0.0);
    assert_eq!(input.unit_price, 10_000.0);
}

#[test]
fn payment_form_clamps_zero_units() {
    let input = PaymentPlanForm {
        unit_count: 0,
        unit_price: 500.0,
    }
    .to_input();
    assert_eq!(input.unit_count, 1);
    assert_eq!(input.unit_price, 1000.0);
}

#[test]
fn config_toml_roundtrip() {
    let cfg = Config {
        language: "ko-kr".into(),
        window_alpha: 0.8,
        always_on_top: true,
        ..Default::default()
    };
    let text = cfg.to_toml_string().expect("serialize");
    assert_eq!(Config::from_toml_str(&text).expect("parse"), cfg);
}

#[test]
fn partial_config_uses_defaults() {
    let cfg = Config::from_toml_str("language = \"en-us\"\n").expect("parse");
    assert_eq!(cfg.language, "en-us");
    assert_eq!(cfg.window_alpha, 1.0);
    assert!(!cfg.always_on_top);
    assert_eq!(cfg.language_pack_dir, None);
}

#[test]
fn malformed_config_is_an_error() {
    assert!(Config::from_toml_str("window_alpha = \"high\"").is_err());
}
