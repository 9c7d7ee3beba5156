use serde::{Deserialize, Serialize};

/// 보일러마력 → kW 환산 계수 [kW/BHP].
pub const KW_PER_BHP: f64 = 9.8095;

/// 동력 단위. 내부 기준은 킬로와트(kW)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    KiloWatt,
    MegaWatt,
    BoilerHorsepower,
}

fn to_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::KiloWatt => value,
        PowerUnit::MegaWatt => value * 1000.0,
        PowerUnit::BoilerHorsepower => value * KW_PER_BHP,
    }
}

fn from_kilowatt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::KiloWatt => value,
        PowerUnit::MegaWatt => value / 1000.0,
        PowerUnit::BoilerHorsepower => value / KW_PER_BHP,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let kw = to_kilowatt(value, from);
    from_kilowatt(kw, to)
}
