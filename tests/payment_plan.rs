use hydrogen_calculator::hydrogen::{
    compute_option, compute_payment_plan, compute_plans, compute_total_cost, PaymentPlanInput,
    DOWN_PAYMENT_TIERS, INSTALLMENT_COUNT,
};

#[test]
fn scenario_c_two_units() {
    let total = compute_total_cost(20_000.0, 2);
    assert_eq!(total, 40_000.0);

    let options = compute_plans(total);
    assert_eq!(options[0].down_amount, 20_000.0);
    assert!((options[0].monthly_payment - 1818.18).abs() < 0.01);
    assert!((options[2].down_amount - 6_000.0).abs() < 1e-9);
    assert!((options[2].monthly_payment - 3090.91).abs() < 0.01);
}

#[test]
fn tiers_and_labels_are_fixed_regardless_of_total() {
    for total in [1000.0, 10_000.0, 123_456.78, 9.9e8] {
        let options = compute_plans(total);
        let percents: Vec<f64> = options.iter().map(|o| o.down_percent).collect();
        assert_eq!(percents, vec![50.0, 25.0, 15.0]);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Option 1", "Option 2", "Option 3"]);
    }
    assert_eq!(DOWN_PAYMENT_TIERS, [50.0, 25.0, 15.0]);
}

#[test]
fn down_plus_installments_reassemble_total() {
    for total in [1000.0, 7_777.77, 40_000.0, 1_234_567.89] {
        for option in compute_plans(total) {
            let rebuilt = option.down_amount + f64::from(INSTALLMENT_COUNT) * option.monthly_payment;
            assert!((rebuilt - total).abs() <= 1e-6 * total, "{option:?} total={total}");
            assert!((option.total_paid() - rebuilt).abs() < 1e-9);
        }
    }
}

#[test]
fn single_option_uses_eleven_installments() {
    let option = compute_option("Custom", 25.0, 11_000.0);
    assert_eq!(option.label, "Custom");
    assert_eq!(option.down_amount, 2_750.0);
    assert!((option.monthly_payment - 750.0).abs() < 1e-9);
}

#[test]
fn plan_wraps_total_and_options() {
    let plan = compute_payment_plan(PaymentPlanInput {
        unit_count: 3,
        unit_price: 10_000.0,
    });
    assert_eq!(plan.total_cost, 30_000.0);
    assert_eq!(plan.options.len(), 3);
    assert_eq!(plan.options[1].down_amount, 7_500.0);
}
