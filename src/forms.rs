//! 입력 위젯 상태와 최소값 제한.
//!
//! 계산 함수는 검증을 하지 않으므로, GUI/CLI는 계산 전에 항상 `clamp()`를 거친다.
//! ROI 탭과 분할 납부 탭의 유닛 가격은 서로 독립된 필드다.

use crate::hydrogen::{PaymentPlanInput, RoiInput};

/// 연간 연료비 최소값/기본값/증감 단위.
pub const FUEL_COST_MIN: f64 = 0.0;
pub const FUEL_COST_DEFAULT: f64 = 0.0;
pub const FUEL_COST_STEP: f64 = 1000.0;

/// 유닛 가격 최소값/기본값/증감 단위.
pub const UNIT_PRICE_MIN: f64 = 1000.0;
pub const UNIT_PRICE_DEFAULT: f64 = 10_000.0;
pub const UNIT_PRICE_STEP: f64 = 1000.0;

/// 유닛 수량 최소값/기본값/증감 단위.
pub const UNIT_COUNT_MIN: u32 = 1;
pub const UNIT_COUNT_DEFAULT: u32 = 1;
pub const UNIT_COUNT_STEP: u32 = 1;

/// ROI 탭 입력 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiForm {
    pub annual_fuel_cost: f64,
    pub unit_price: f64,
}

impl Default for RoiForm {
    fn default() -> Self {
        Self {
            annual_fuel_cost: FUEL_COST_DEFAULT,
            unit_price: UNIT_PRICE_DEFAULT,
        }
    }
}

impl RoiForm {
    /// 위젯 최소값을 적용한다. NaN/무한대는 기본값으로 되돌린다.
    pub fn clamp(&mut self) {
        self.annual_fuel_cost = clamp_min(self.annual_fuel_cost, FUEL_COST_MIN, FUEL_COST_DEFAULT);
        self.unit_price = clamp_min(self.unit_price, UNIT_PRICE_MIN, UNIT_PRICE_DEFAULT);
    }

    /// 제한을 적용한 계산 입력을 만든다.
    pub fn to_input(&self) -> RoiInput {
        let mut form = *self;
        form.clamp();
        RoiInput {
            annual_fuel_cost: form.annual_fuel_cost,
            unit_price: form.unit_price,
        }
    }
}

/// 분할 납부 탭 입력 상태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentPlanForm {
    pub unit_count: u32,
    pub unit_price: f64,
}

impl Default for PaymentPlanForm {
    fn default() -> Self {
        Self {
            unit_count: UNIT_COUNT_DEFAULT,
            unit_price: UNIT_PRICE_DEFAULT,
        }
    }
}

impl PaymentPlanForm {
    pub fn clamp(&mut self) {
        self.unit_count = self.unit_count.max(UNIT_COUNT_MIN);
        self.unit_price = clamp_min(self.unit_price, UNIT_PRICE_MIN, UNIT_PRICE_DEFAULT);
    }

    pub fn to_input(&self) -> PaymentPlanInput {
        let mut form = *self;
        form.clamp();
        PaymentPlanInput {
            unit_count: form.unit_count,
            unit_price: form.unit_price,
        }
    }
}

/// 최소값 미만이면 최소값으로 올린다.
pub fn clamp_min(value: f64, min: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    value.max(min)
}
