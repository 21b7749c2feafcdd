use hydrogen_calculator::format::{
    format_breakeven, format_currency, format_down_label, format_percent, format_total_breakdown,
    INFINITY_GLYPH,
};
use hydrogen_calculator::hydrogen::{compute_plans, Breakeven};

#[test]
fn currency_has_separators_and_two_decimals() {
    assert_eq!(format_currency(12_345.678), "$12,345.68");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(999.999), "$1,000.00");
    assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_currency(40_000.0 / 11.0), "$3,636.36");
}

#[test]
fn negative_currency_keeps_sign_after_dollar() {
    assert_eq!(format_currency(-10_000.0), "$-10,000.00");
    assert_eq!(format_currency(-512.5), "$-512.50");
}

#[test]
fn breakeven_renders_months_or_glyph() {
    assert_eq!(format_breakeven(Breakeven::Finite(12.0)), "12.0 months");
    assert_eq!(format_breakeven(Breakeven::Finite(7.26)), "7.3 months");
    assert_eq!(format_breakeven(Breakeven::Infinite), INFINITY_GLYPH);
    assert_eq!(INFINITY_GLYPH, "∞");
}

#[test]
fn percent_labels_are_integers() {
    assert_eq!(format_percent(50.0), "50%");
    assert_eq!(format_down_label(15.0), "15% Down");
}

#[test]
fn total_breakdown_line() {
    let options = compute_plans(40_000.0);
    assert_eq!(
        format_total_breakdown(&options[0], 40_000.0),
        "$20,000.00 + (11 × $1,818.18) = $40,000.00"
    );
    assert_eq!(
        format_total_breakdown(&options[2], 40_000.0),
        "$6,000.00 + (11 × $3,090.91) = $40,000.00"
    );
}
