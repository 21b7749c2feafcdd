use serde::Serialize;

/// 수소 유닛 도입 시 예상되는 연료비 절감률(10%).
pub const SAVINGS_RATE: f64 = 0.10;
/// 순절감액을 평가하는 기간 [년].
pub const NET_SAVINGS_HORIZON_YEARS: f64 = 4.0;
/// 1년의 개월 수.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// ROI 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiInput {
    /// 최장 노선의 연간 경유 연료비 [$/년]
    pub annual_fuel_cost: f64,
    /// 유닛 가격 [$]
    pub unit_price: f64,
}

/// 손익분기 시점. 절감액이 없으면 영원히 도달하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Breakeven {
    /// 손익분기까지의 개월 수
    Finite(f64),
    /// 절감액이 0이라 회수 불가
    Infinite,
}

impl Breakeven {
    /// 유한한 경우 개월 수를 반환한다.
    pub fn months(&self) -> Option<f64> {
        match self {
            Breakeven::Finite(m) => Some(*m),
            Breakeven::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Breakeven::Infinite)
    }
}

/// ROI 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    /// 연간 예상 절감액 [$/년]
    pub potential_annual_savings: f64,
    /// 손익분기 시점
    pub breakeven: Breakeven,
    /// 현재 월 연료비 [$/월]
    pub monthly_cost: f64,
    /// 유닛 도입 시 월 절감액 [$/월]
    pub monthly_savings: f64,
    /// 4년 누적 절감액 - 유닛 가격 [$]
    pub four_year_net_savings: f64,
    /// 입력 유닛 가격 (표시용)
    pub unit_price: f64,
}

impl RoiResult {
    /// 순절감액 표시 색상 구분.
    pub fn tone(&self) -> SavingsTone {
        SavingsTone::from_net_savings(self.four_year_net_savings)
    }
}

/// 순절감액 표시 톤. 0은 긍정 쪽에 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SavingsTone {
    Affirmative,
    Warning,
}

impl SavingsTone {
    pub fn from_net_savings(net: f64) -> Self {
        if net >= 0.0 {
            SavingsTone::Affirmative
        } else {
            SavingsTone::Warning
        }
    }
}

/// 연간 연료비와 유닛 가격으로 절감액/손익분기/4년 순절감액을 계산한다.
///
/// 입력 검증은 하지 않는다. 최소값 제한은 입력 폼([`crate::forms`])에서 처리한다.
pub fn compute_roi(input: RoiInput) -> RoiResult {
    let savings = input.annual_fuel_cost * SAVINGS_RATE;
    let breakeven = if savings > 0.0 {
        Breakeven::Finite((input.unit_price / savings) * MONTHS_PER_YEAR)
    } else {
        Breakeven::Infinite
    };
    let result = RoiResult {
        potential_annual_savings: savings,
        breakeven,
        monthly_cost: input.annual_fuel_cost / MONTHS_PER_YEAR,
        monthly_savings: savings / MONTHS_PER_YEAR,
        four_year_net_savings: savings * NET_SAVINGS_HORIZON_YEARS - input.unit_price,
        unit_price: input.unit_price,
    };
    tracing::trace!(?input, ?result, "roi recomputed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_savings_never_yields_finite_breakeven() {
        // 폼 밖에서 음수가 들어와도 0 나누기/음수 개월은 나오지 않는다.
        let res = compute_roi(RoiInput {
            annual_fuel_cost: -500.0,
            unit_price: 10_000.0,
        });
        assert!(res.breakeven.is_infinite());
        assert_eq!(res.breakeven.months(), None);
    }

    #[test]
    fn tone_threshold_is_inclusive_of_zero() {
        assert_eq!(SavingsTone::from_net_savings(0.0), SavingsTone::Affirmative);
        assert_eq!(SavingsTone::from_net_savings(-0.01), SavingsTone::Warning);
        assert_eq!(SavingsTone::from_net_savings(1.0), SavingsTone::Affirmative);
    }
}
