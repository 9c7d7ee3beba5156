use crate::units::{convert_energy, convert_power, EnergyUnit, PowerUnit};

/// 연간 최대 운전시간 [h/yr].
pub const MAX_ANNUAL_HOURS: f64 = 8760.0;

/// 연료 전환(석탄 → 천연가스) 분석 입력.
#[derive(Debug, Clone)]
pub struct FuelSwitchInput {
    /// 석탄 저위발열량 PCI [kJ/kg]
    pub coal_lhv_kj_per_kg: f64,
    /// 천연가스 저위발열량 PCI [kJ/m3]
    pub gas_lhv_kj_per_m3: f64,
    /// 석탄 배출계수 [kg CO2/kg]
    pub coal_emission_factor_kg_per_kg: f64,
    /// 천연가스 배출계수 [kg CO2/m3]
    pub gas_emission_factor_kg_per_m3: f64,
    /// 보일러 정격용량 [BHP]
    pub boiler_capacity_bhp: f64,
    /// 석탄 연소 시 보일러 효율 (0~1]
    pub boiler_efficiency_coal: f64,
    /// 천연가스 연소 시 보일러 효율 (0~1]
    pub boiler_efficiency_gas: f64,
    /// 평균 부하율 (0~1]
    pub average_load: f64,
    /// 연간 운전시간 [h/yr], 8760 이하
    pub operating_hours_per_year: f64,
    /// 석탄 단가 [원/ton]
    pub coal_price_per_ton: f64,
    /// 천연가스 단가 [원/m3]
    pub gas_price_per_m3: f64,
}

/// 입력 검증 오류. 계산 전에 걸러지며 계산 단계에서는 발생하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 0보다 커야 하는 항목
    NonPositive(&'static str),
    /// 음수가 허용되지 않는 항목
    Negative(&'static str),
    /// (0, 1] 범위를 벗어난 비율 항목
    FractionOutOfRange(&'static str),
    /// 연간 운전시간 범위 (0, 8760] 위반
    HoursOutOfRange(f64),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NonPositive(field) => write!(f, "0보다 커야 합니다: {field}"),
            InputError::Negative(field) => write!(f, "음수는 허용되지 않습니다: {field}"),
            InputError::FractionOutOfRange(field) => {
                write!(f, "(0, 1] 범위를 벗어났습니다: {field}")
            }
            InputError::HoursOutOfRange(hours) => {
                write!(f, "연간 운전시간은 0 초과 8760 이하이어야 합니다: {hours}")
            }
        }
    }
}

impl std::error::Error for InputError {}

impl FuelSwitchInput {
    /// 모든 항목이 정의 구간 안에 있는지 검사한다.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.coal_lhv_kj_per_kg <= 0.0 {
            return Err(InputError::NonPositive("coal_lhv_kj_per_kg"));
        }
        if self.gas_lhv_kj_per_m3 <= 0.0 {
            return Err(InputError::NonPositive("gas_lhv_kj_per_m3"));
        }
        if self.coal_emission_factor_kg_per_kg < 0.0 {
            return Err(InputError::Negative("coal_emission_factor_kg_per_kg"));
        }
        if self.gas_emission_factor_kg_per_m3 < 0.0 {
            return Err(InputError::Negative("gas_emission_factor_kg_per_m3"));
        }
        if self.boiler_capacity_bhp <= 0.0 {
            return Err(InputError::NonPositive("boiler_capacity_bhp"));
        }
        if self.boiler_efficiency_coal <= 0.0 || self.boiler_efficiency_coal > 1.0 {
            return Err(InputError::FractionOutOfRange("boiler_efficiency_coal"));
        }
        if self.boiler_efficiency_gas <= 0.0 || self.boiler_efficiency_gas > 1.0 {
            return Err(InputError::FractionOutOfRange("boiler_efficiency_gas"));
        }
        if self.average_load <= 0.0 || self.average_load > 1.0 {
            return Err(InputError::FractionOutOfRange("average_load"));
        }
        if self.operating_hours_per_year <= 0.0 || self.operating_hours_per_year > MAX_ANNUAL_HOURS
        {
            return Err(InputError::HoursOutOfRange(self.operating_hours_per_year));
        }
        if self.coal_price_per_ton < 0.0 {
            return Err(InputError::Negative("coal_price_per_ton"));
        }
        if self.gas_price_per_m3 < 0.0 {
            return Err(InputError::Negative("gas_price_per_m3"));
        }
        Ok(())
    }
}

/// 두 연료비를 같게 만드는 CO2 가격 산정 결과.
///
/// 숫자 0은 그 자체로 유효한 손익분기 가격일 수 있으므로
/// "산정 불필요/불가" 상태는 별도 값으로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakEvenCo2Price {
    /// 전환을 정당화하는 CO2 가격 [원/ton CO2]
    Applicable(f64),
    /// 가스가 이미 더 싸거나 같아 산정이 불필요
    NotApplicable,
    /// 비용 격차는 있으나 배출 저감이 0이라 정의 불가
    Undefined,
}

impl BreakEvenCo2Price {
    /// 산정된 가격이 있으면 반환한다.
    pub fn value(&self) -> Option<f64> {
        match self {
            BreakEvenCo2Price::Applicable(price) => Some(*price),
            _ => None,
        }
    }
}

/// 연료 전환 분석 결과. 매 평가마다 입력만으로 새로 계산된다.
#[derive(Debug, Clone)]
pub struct FuelSwitchReport {
    /// 보일러 정격용량 [kW]
    pub boiler_capacity_kw: f64,
    /// 평균 운전 출력 [kW]
    pub average_operating_kw: f64,
    /// 연간 유효 에너지 [kWh]
    pub annual_energy_kwh: f64,
    /// 연간 유효 에너지 [kJ]
    pub annual_energy_kj: f64,
    /// 석탄 소비량 [ton/yr]
    pub coal_consumption_tons: f64,
    /// 석탄 CO2 배출량 [ton/yr]
    pub coal_emissions_tons: f64,
    /// 석탄 연료비 [원/yr]
    pub coal_cost: f64,
    /// 천연가스 소비량 [m3/yr]
    pub gas_consumption_m3: f64,
    /// 천연가스 CO2 배출량 [ton/yr]
    pub gas_emissions_tons: f64,
    /// 천연가스 연료비 [원/yr]
    pub gas_cost: f64,
    /// 비용 차이(가스 - 석탄) [원/yr]
    pub cost_difference: f64,
    /// 연간 CO2 저감량(석탄 - 가스) [ton/yr]
    pub emissions_reduction_tons: f64,
    /// 손익분기 CO2 가격
    pub break_even_co2_price: BreakEvenCo2Price,
}

/// 연료 전환 분석을 수행한다.
///
/// 검증을 통과한 입력에 대해서는 부수효과 없이 항상 보고서를 반환한다.
pub fn analyze(input: &FuelSwitchInput) -> Result<FuelSwitchReport, InputError> {
    input.validate()?;

    let boiler_capacity_kw = convert_power(
        input.boiler_capacity_bhp,
        PowerUnit::BoilerHorsepower,
        PowerUnit::KiloWatt,
    );
    let average_operating_kw = boiler_capacity_kw * input.average_load;
    let annual_energy_kwh = average_operating_kw * input.operating_hours_per_year;
    let annual_energy_kj = convert_energy(
        annual_energy_kwh,
        EnergyUnit::KilowattHour,
        EnergyUnit::Kilojoule,
    );

    // 연료별 투입 에너지 = 유효 에너지 / 보일러 효율
    let coal_input_energy_kj = annual_energy_kj / input.boiler_efficiency_coal;
    let coal_consumption_tons = coal_input_energy_kj / input.coal_lhv_kj_per_kg / 1000.0;
    // kg CO2/kg는 질량비이므로 톤 단위가 그대로 유지된다
    let coal_emissions_tons = coal_consumption_tons * input.coal_emission_factor_kg_per_kg;
    let coal_cost = coal_consumption_tons * input.coal_price_per_ton;

    let gas_input_energy_kj = annual_energy_kj / input.boiler_efficiency_gas;
    let gas_consumption_m3 = gas_input_energy_kj / input.gas_lhv_kj_per_m3;
    // kg CO2/m3 기준이라 kg → ton 환산이 필요하다
    let gas_emissions_tons = gas_consumption_m3 * input.gas_emission_factor_kg_per_m3 / 1000.0;
    let gas_cost = gas_consumption_m3 * input.gas_price_per_m3;

    let cost_difference = gas_cost - coal_cost;
    let emissions_reduction_tons = coal_emissions_tons - gas_emissions_tons;

    let break_even_co2_price = if cost_difference > 0.0 {
        if emissions_reduction_tons == 0.0 {
            BreakEvenCo2Price::Undefined
        } else {
            BreakEvenCo2Price::Applicable(cost_difference / emissions_reduction_tons)
        }
    } else {
        BreakEvenCo2Price::NotApplicable
    };

    Ok(FuelSwitchReport {
        boiler_capacity_kw,
        average_operating_kw,
        annual_energy_kwh,
        annual_energy_kj,
        coal_consumption_tons,
        coal_emissions_tons,
        coal_cost,
        gas_consumption_m3,
        gas_emissions_tons,
        gas_cost,
        cost_difference,
        emissions_reduction_tons,
        break_even_co2_price,
    })
}
