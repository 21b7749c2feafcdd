//! 수소 유닛 도입 관련 계산 모듈 모음.

pub mod payment_plan;
pub mod roi;

pub use payment_plan::*;
pub use roi::*;
