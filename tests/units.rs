//! BHP/kW, kWh/kJ 단위 변환 회귀 테스트.
use boiler_fuel_switch::units::{
    convert_energy, convert_power, EnergyUnit, PowerUnit, KJ_PER_KWH, KW_PER_BHP,
};

#[test]
fn bhp_to_kw_uses_fixed_factor() {
    // 250 BHP => 2452.375 kW
    let kw = convert_power(250.0, PowerUnit::BoilerHorsepower, PowerUnit::KiloWatt);
    assert!((kw - 250.0 * KW_PER_BHP).abs() < 1e-9);
    assert!((kw - 2452.375).abs() < 1e-9, "got {kw}");
}

#[test]
fn power_roundtrip_through_megawatt() {
    let mw = convert_power(2452.375, PowerUnit::KiloWatt, PowerUnit::MegaWatt);
    assert!((mw - 2.452375).abs() < 1e-9);
    let bhp = convert_power(mw, PowerUnit::MegaWatt, PowerUnit::BoilerHorsepower);
    assert!((bhp - 250.0).abs() < 1e-9, "got {bhp}");
}

#[test]
fn kwh_to_kj_is_3600() {
    let kj = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Kilojoule);
    assert!((kj - KJ_PER_KWH).abs() < 1e-12);
    let mj = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Megajoule);
    assert!((mj - 3.6).abs() < 1e-12, "got {mj}");
}
