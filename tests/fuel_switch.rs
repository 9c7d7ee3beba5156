use boiler_fuel_switch::boiler::fuel_switch::{
    analyze, BreakEvenCo2Price, FuelSwitchInput, InputError,
};

fn reference_input() -> FuelSwitchInput {
    FuelSwitchInput {
        coal_lhv_kj_per_kg: 24000.0,
        gas_lhv_kj_per_m3: 36000.0,
        coal_emission_factor_kg_per_kg: 2.8,
        gas_emission_factor_kg_per_m3: 1.8,
        boiler_capacity_bhp: 250.0,
        boiler_efficiency_coal: 0.75,
        boiler_efficiency_gas: 0.85,
        average_load: 0.70,
        operating_hours_per_year: 6500.0,
        coal_price_per_ton: 400_000.0,
        gas_price_per_m3: 2000.0,
    }
}

fn rel_diff(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

#[test]
fn reference_case_matches_hand_computation() {
    let report = analyze(&reference_input()).expect("reference input is valid");

    assert!(
        (report.boiler_capacity_kw - 2452.375).abs() < 1e-9,
        "capacity_kw={}",
        report.boiler_capacity_kw
    );
    assert!(
        (report.average_operating_kw - 1716.6625).abs() < 1e-9,
        "avg_kw={}",
        report.average_operating_kw
    );
    assert!(
        (report.annual_energy_kwh - 11_158_306.25).abs() < 1e-4,
        "kwh={}",
        report.annual_energy_kwh
    );

    let energy_kj = 11_158_306.25 * 3600.0;
    let expected_coal_tons = energy_kj / 0.75 / 24000.0 / 1000.0;
    let expected_gas_m3 = energy_kj / 0.85 / 36000.0;
    assert!(
        rel_diff(report.coal_consumption_tons, expected_coal_tons) < 1e-6,
        "coal_tons={}",
        report.coal_consumption_tons
    );
    assert!(
        rel_diff(report.gas_consumption_m3, expected_gas_m3) < 1e-6,
        "gas_m3={}",
        report.gas_consumption_m3
    );

    let expected_coal_emissions = expected_coal_tons * 2.8;
    let expected_gas_emissions = expected_gas_m3 * 1.8 / 1000.0;
    assert!(rel_diff(report.coal_emissions_tons, expected_coal_emissions) < 1e-6);
    assert!(rel_diff(report.gas_emissions_tons, expected_gas_emissions) < 1e-6);

    let expected_coal_cost = expected_coal_tons * 400_000.0;
    let expected_gas_cost = expected_gas_m3 * 2000.0;
    assert!(rel_diff(report.coal_cost, expected_coal_cost) < 1e-6);
    assert!(rel_diff(report.gas_cost, expected_gas_cost) < 1e-6);

    // 기본값에서는 가스가 더 비싸므로 손익분기 가격이 산정되어야 한다
    let expected_price = (expected_gas_cost - expected_coal_cost)
        / (expected_coal_emissions - expected_gas_emissions);
    match report.break_even_co2_price {
        BreakEvenCo2Price::Applicable(price) => {
            assert!(rel_diff(price, expected_price) < 1e-6, "price={price}");
            assert!(price > 0.0);
        }
        other => panic!("expected Applicable, got {other:?}"),
    }
}

#[test]
fn annual_energy_kj_is_exactly_kwh_times_3600() {
    let report = analyze(&reference_input()).expect("reference input is valid");
    assert_eq!(report.annual_energy_kj, report.annual_energy_kwh * 3600.0);
}

#[test]
fn consumption_monotonic_in_hours_and_capacity() {
    let mut low = reference_input();
    low.operating_hours_per_year = 3000.0;
    let mut high = reference_input();
    high.operating_hours_per_year = 6000.0;
    let r_low = analyze(&low).expect("valid");
    let r_high = analyze(&high).expect("valid");
    assert!(r_high.coal_consumption_tons > r_low.coal_consumption_tons);
    assert!(r_high.gas_consumption_m3 > r_low.gas_consumption_m3);

    let mut small = reference_input();
    small.boiler_capacity_bhp = 150.0;
    let mut large = reference_input();
    large.boiler_capacity_bhp = 300.0;
    let r_small = analyze(&small).expect("valid");
    let r_large = analyze(&large).expect("valid");
    assert!(r_large.coal_consumption_tons > r_small.coal_consumption_tons);
    assert!(r_large.gas_consumption_m3 > r_small.gas_consumption_m3);
}

#[test]
fn consumption_monotonic_decreasing_in_efficiency() {
    let mut poor = reference_input();
    poor.boiler_efficiency_coal = 0.6;
    poor.boiler_efficiency_gas = 0.6;
    let mut good = reference_input();
    good.boiler_efficiency_coal = 0.9;
    good.boiler_efficiency_gas = 0.9;
    let r_poor = analyze(&poor).expect("valid");
    let r_good = analyze(&good).expect("valid");
    assert!(r_good.coal_consumption_tons < r_poor.coal_consumption_tons);
    assert!(r_good.gas_consumption_m3 < r_poor.gas_consumption_m3);
}

#[test]
fn break_even_not_applicable_when_gas_cheaper_or_equal() {
    // 가스가 공짜면 비용 차이가 음수
    let mut cheaper = reference_input();
    cheaper.gas_price_per_m3 = 0.0;
    let report = analyze(&cheaper).expect("valid");
    assert!(report.cost_difference < 0.0);
    assert_eq!(
        report.break_even_co2_price,
        BreakEvenCo2Price::NotApplicable
    );

    // 두 연료 모두 공짜면 비용 차이가 정확히 0
    let mut equal = reference_input();
    equal.coal_price_per_ton = 0.0;
    equal.gas_price_per_m3 = 0.0;
    let report = analyze(&equal).expect("valid");
    assert_eq!(report.cost_difference, 0.0);
    assert_eq!(
        report.break_even_co2_price,
        BreakEvenCo2Price::NotApplicable
    );
}

#[test]
fn break_even_undefined_when_no_emissions_reduction() {
    let mut input = reference_input();
    input.coal_emission_factor_kg_per_kg = 0.0;
    input.gas_emission_factor_kg_per_m3 = 0.0;
    input.coal_price_per_ton = 0.0;
    let report = analyze(&input).expect("valid");
    assert!(report.cost_difference > 0.0, "diff={}", report.cost_difference);
    assert_eq!(report.emissions_reduction_tons, 0.0);
    assert_eq!(report.break_even_co2_price, BreakEvenCo2Price::Undefined);
    assert_eq!(report.break_even_co2_price.value(), None);
}

#[test]
fn coal_price_change_only_touches_cost_fields() {
    let base = analyze(&reference_input()).expect("valid");
    let mut repriced = reference_input();
    repriced.coal_price_per_ton = 500_000.0;
    let changed = analyze(&repriced).expect("valid");

    assert_eq!(changed.coal_consumption_tons, base.coal_consumption_tons);
    assert_eq!(changed.coal_emissions_tons, base.coal_emissions_tons);
    assert_eq!(changed.gas_consumption_m3, base.gas_consumption_m3);
    assert_eq!(changed.gas_emissions_tons, base.gas_emissions_tons);
    assert_eq!(changed.gas_cost, base.gas_cost);
    assert_eq!(
        changed.emissions_reduction_tons,
        base.emissions_reduction_tons
    );

    assert!(changed.coal_cost != base.coal_cost);
    assert!(changed.cost_difference != base.cost_difference);
}

#[test]
fn validation_rejects_out_of_domain_fields() {
    let mut input = reference_input();
    input.coal_lhv_kj_per_kg = 0.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::NonPositive("coal_lhv_kj_per_kg"))
    );

    let mut input = reference_input();
    input.gas_lhv_kj_per_m3 = -1.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::NonPositive("gas_lhv_kj_per_m3"))
    );

    let mut input = reference_input();
    input.coal_emission_factor_kg_per_kg = -0.1;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::Negative("coal_emission_factor_kg_per_kg"))
    );

    let mut input = reference_input();
    input.boiler_capacity_bhp = 0.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::NonPositive("boiler_capacity_bhp"))
    );

    let mut input = reference_input();
    input.boiler_efficiency_coal = 0.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::FractionOutOfRange("boiler_efficiency_coal"))
    );

    let mut input = reference_input();
    input.boiler_efficiency_gas = 1.2;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::FractionOutOfRange("boiler_efficiency_gas"))
    );

    let mut input = reference_input();
    input.average_load = 0.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::FractionOutOfRange("average_load"))
    );

    let mut input = reference_input();
    input.operating_hours_per_year = 9000.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::HoursOutOfRange(9000.0))
    );

    let mut input = reference_input();
    input.operating_hours_per_year = 0.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::HoursOutOfRange(0.0))
    );

    let mut input = reference_input();
    input.coal_price_per_ton = -1.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::Negative("coal_price_per_ton"))
    );

    let mut input = reference_input();
    input.gas_price_per_m3 = -1.0;
    assert_eq!(
        analyze(&input).err(),
        Some(InputError::Negative("gas_price_per_m3"))
    );
}
