//! 통화/비율/손익분기 표시 문자열 헬퍼. GUI와 CLI가 같은 포맷을 쓴다.

use crate::hydrogen::{Breakeven, PaymentOption, INSTALLMENT_COUNT};

/// 무한 손익분기 표시 기호.
pub const INFINITY_GLYPH: &str = "∞";

/// `$12,345.68` 형식. 음수는 `$-10,000.00`으로 표시한다.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (negative, digits) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let sign = if negative { "-" } else { "" };
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `12.0 months` 또는 `∞`.
pub fn format_breakeven(breakeven: Breakeven) -> String {
    format_breakeven_with_unit(breakeven, "months")
}

/// 개월 단위 문자열을 번역된 값으로 바꿔 표시한다.
pub fn format_breakeven_with_unit(breakeven: Breakeven, unit: &str) -> String {
    match breakeven {
        Breakeven::Finite(months) => format!("{months:.1} {unit}"),
        Breakeven::Infinite => INFINITY_GLYPH.to_string(),
    }
}

/// 정수 퍼센트 (`50%`).
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// 옵션 카드의 `50% Down` 라벨.
pub fn format_down_label(percent: f64) -> String {
    format!("{} Down", format_percent(percent))
}

/// `$20,000.00 + (11 × $1,818.18) = $40,000.00`
pub fn format_total_breakdown(option: &PaymentOption, total_cost: f64) -> String {
    format!(
        "{} + ({INSTALLMENT_COUNT} × {}) = {}",
        format_currency(option.down_amount),
        format_currency(option.monthly_payment),
        format_currency(total_cost)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_boundaries() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
