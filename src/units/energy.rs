use serde::{Deserialize, Serialize};

/// kWh → kJ 환산 계수 [kJ/kWh].
pub const KJ_PER_KWH: f64 = 3600.0;

/// 에너지 단위. 내부 기준은 킬로줄(kJ)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Kilojoule,
    Megajoule,
    KilowattHour,
}

fn to_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::Megajoule => value * 1000.0,
        EnergyUnit::KilowattHour => value * KJ_PER_KWH,
    }
}

fn from_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::Megajoule => value / 1000.0,
        EnergyUnit::KilowattHour => value / KJ_PER_KWH,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let kj = to_kilojoule(value, from);
    from_kilojoule(kj, to)
}
