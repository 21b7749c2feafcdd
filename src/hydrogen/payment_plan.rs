use serde::Serialize;

/// 계약금 이후 분할 납부 개월 수.
pub const INSTALLMENT_COUNT: u32 = 11;
/// 고정 계약금 비율(%) 순서. 표시 순서도 이 순서를 따른다.
pub const DOWN_PAYMENT_TIERS: [f64; 3] = [50.0, 25.0, 15.0];

/// 분할 납부 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentPlanInput {
    /// 유닛 수량
    pub unit_count: u32,
    /// 유닛 가격 [$]
    pub unit_price: f64,
}

/// 계약금 비율별 납부 옵션.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOption {
    /// 표시 이름 ("Option 1" 등)
    pub label: String,
    /// 계약금 비율 [%]
    pub down_percent: f64,
    /// 계약금 [$]
    pub down_amount: f64,
    /// 월 납부액 [$/월], 11회
    pub monthly_payment: f64,
}

impl PaymentOption {
    /// 계약금 + 11회 납부 합계.
    pub fn total_paid(&self) -> f64 {
        self.down_amount + f64::from(INSTALLMENT_COUNT) * self.monthly_payment
    }
}

/// 총액과 세 가지 납부 옵션.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPlan {
    pub total_cost: f64,
    pub options: [PaymentOption; 3],
}

/// 총 구매 금액 = 유닛 가격 × 수량.
pub fn compute_total_cost(unit_price: f64, unit_count: u32) -> f64 {
    unit_price * f64::from(unit_count)
}

/// 계약금 비율로 단일 납부 옵션을 계산한다.
pub fn compute_option(label: &str, down_percent: f64, total_cost: f64) -> PaymentOption {
    let down_amount = total_cost * (down_percent / 100.0);
    let remaining = total_cost - down_amount;
    PaymentOption {
        label: label.to_string(),
        down_percent,
        down_amount,
        monthly_payment: remaining / f64::from(INSTALLMENT_COUNT),
    }
}

/// 50/25/15% 세 옵션을 고정 순서로 만든다.
pub fn compute_plans(total_cost: f64) -> [PaymentOption; 3] {
    let [first, second, third] = DOWN_PAYMENT_TIERS;
    [
        compute_option("Option 1", first, total_cost),
        compute_option("Option 2", second, total_cost),
        compute_option("Option 3", third, total_cost),
    ]
}

/// 입력 폼 값으로 총액과 옵션 전체를 계산한다.
pub fn compute_payment_plan(input: PaymentPlanInput) -> PaymentPlan {
    let total_cost = compute_total_cost(input.unit_price, input.unit_count);
    let plan = PaymentPlan {
        total_cost,
        options: compute_plans(total_cost),
    };
    tracing::trace!(?input, total_cost, "payment plan recomputed");
    plan
}
