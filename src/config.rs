use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::boiler::fuel_switch::FuelSwitchInput;

/// 연료 전환 분석 입력 기본값 프리셋. config.toml의 [defaults] 테이블이다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultInputs {
    pub coal_lhv_kj_per_kg: f64,
    pub gas_lhv_kj_per_m3: f64,
    pub coal_emission_factor_kg_per_kg: f64,
    pub gas_emission_factor_kg_per_m3: f64,
    pub boiler_capacity_bhp: f64,
    pub boiler_efficiency_coal: f64,
    pub boiler_efficiency_gas: f64,
    pub average_load: f64,
    pub operating_hours_per_year: f64,
    pub coal_price_per_ton: f64,
    pub gas_price_per_m3: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
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
}

impl DefaultInputs {
    /// 프리셋을 분석 입력으로 변환한다.
    pub fn to_input(&self) -> FuelSwitchInput {
        FuelSwitchInput {
            coal_lhv_kj_per_kg: self.coal_lhv_kj_per_kg,
            gas_lhv_kj_per_m3: self.gas_lhv_kj_per_m3,
            coal_emission_factor_kg_per_kg: self.coal_emission_factor_kg_per_kg,
            gas_emission_factor_kg_per_m3: self.gas_emission_factor_kg_per_m3,
            boiler_capacity_bhp: self.boiler_capacity_bhp,
            boiler_efficiency_coal: self.boiler_efficiency_coal,
            boiler_efficiency_gas: self.boiler_efficiency_gas,
            average_load: self.average_load,
            operating_hours_per_year: self.operating_hours_per_year,
            coal_price_per_ton: self.coal_price_per_ton,
            gas_price_per_m3: self.gas_price_per_m3,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (ko/en). None이면 시스템 로케일을 따른다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub defaults: DefaultInputs,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
