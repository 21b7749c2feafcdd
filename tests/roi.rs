use hydrogen_calculator::hydrogen::{compute_roi, Breakeven, RoiInput, SavingsTone, SAVINGS_RATE};

fn roi(annual_fuel_cost: f64, unit_price: f64) -> hydrogen_calculator::hydrogen::RoiResult {
    compute_roi(RoiInput {
        annual_fuel_cost,
        unit_price,
    })
}

#[test]
fn scenario_a_one_year_breakeven() {
    let res = roi(100_000.0, 10_000.0);
    assert!((res.potential_annual_savings - 10_000.0).abs() < 1e-9);
    match res.breakeven {
        Breakeven::Finite(m) => assert!((m - 12.0).abs() < 1e-9, "months={m}"),
        Breakeven::Infinite => panic!("expected finite breakeven"),
    }
    assert!((res.four_year_net_savings - 30_000.0).abs() < 1e-9);
    assert_eq!(res.tone(), SavingsTone::Affirmative);
}

#[test]
fn scenario_b_zero_fuel_cost_is_infinite() {
    let res = roi(0.0, 10_000.0);
    assert_eq!(res.breakeven, Breakeven::Infinite);
    assert!((res.four_year_net_savings + 10_000.0).abs() < 1e-9);
    assert_eq!(res.monthly_cost, 0.0);
    assert_eq!(res.monthly_savings, 0.0);
    assert_eq!(res.tone(), SavingsTone::Warning);
}

#[test]
fn savings_rate_and_breakeven_formula_hold_across_inputs() {
    for fuel in [1.0, 999.0, 12_345.67, 250_000.0, 1.0e9] {
        for price in [1000.0, 10_000.0, 73_500.5, 2.0e6] {
            let res = roi(fuel, price);
            let savings = fuel * SAVINGS_RATE;
            assert!((res.potential_annual_savings - savings).abs() <= 1e-9 * savings.max(1.0));
            let expected = (price / savings) * 12.0;
            let months = res.breakeven.months().expect("finite");
            assert!((months - expected).abs() <= 1e-9 * expected);
        }
    }
}

#[test]
fn monthly_values_are_annual_over_twelve() {
    let res = roi(60_000.0, 10_000.0);
    assert!((res.monthly_cost - 5_000.0).abs() < 1e-9);
    assert!((res.monthly_savings - 500.0).abs() < 1e-9);
}

#[test]
fn exactly_breaking_even_over_four_years_is_affirmative() {
    // 연 2,500 절감 × 4년 = 10,000 = 유닛 가격
    let res = roi(25_000.0, 10_000.0);
    assert!(res.four_year_net_savings.abs() < 1e-9);
    assert_eq!(res.tone(), SavingsTone::Affirmative);
}

#[test]
fn echoes_unit_price() {
    assert_eq!(roi(5_000.0, 42_000.0).unit_price, 42_000.0);
}
