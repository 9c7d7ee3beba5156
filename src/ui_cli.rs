use std::io::{self, Write};

use crate::app::AppError;
use crate::boiler::fuel_switch::{self, BreakEvenCo2Price, FuelSwitchInput, FuelSwitchReport};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::sampling::operating_hours::{self, DailyOperatingHours, OperatingHoursInput};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FuelSwitch,
    DailyHours,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FUEL_SWITCH));
    println!("{}", tr.t(keys::MAIN_MENU_DAILY_HOURS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FuelSwitch),
            "2" => return Ok(MenuChoice::DailyHours),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 연료 전환 분석 메뉴를 처리한다. 입력 수집과 결과 표시만 담당한다.
pub fn handle_fuel_switch(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FUEL_SWITCH_HEADING));
    println!("{}", tr.t(keys::FUEL_SWITCH_NOTE_DEFAULTS));
    let d = cfg.defaults.to_input();
    let input = FuelSwitchInput {
        coal_lhv_kj_per_kg: read_f64_default(tr, keys::PROMPT_COAL_LHV, d.coal_lhv_kj_per_kg)?,
        gas_lhv_kj_per_m3: read_f64_default(tr, keys::PROMPT_GAS_LHV, d.gas_lhv_kj_per_m3)?,
        coal_emission_factor_kg_per_kg: read_f64_default(
            tr,
            keys::PROMPT_COAL_EMISSION_FACTOR,
            d.coal_emission_factor_kg_per_kg,
        )?,
        gas_emission_factor_kg_per_m3: read_f64_default(
            tr,
            keys::PROMPT_GAS_EMISSION_FACTOR,
            d.gas_emission_factor_kg_per_m3,
        )?,
        boiler_capacity_bhp: read_f64_default(tr, keys::PROMPT_CAPACITY_BHP, d.boiler_capacity_bhp)?,
        boiler_efficiency_coal: read_f64_default(
            tr,
            keys::PROMPT_EFFICIENCY_COAL,
            d.boiler_efficiency_coal,
        )?,
        boiler_efficiency_gas: read_f64_default(
            tr,
            keys::PROMPT_EFFICIENCY_GAS,
            d.boiler_efficiency_gas,
        )?,
        average_load: read_f64_default(tr, keys::PROMPT_AVERAGE_LOAD, d.average_load)?,
        operating_hours_per_year: read_f64_default(
            tr,
            keys::PROMPT_ANNUAL_HOURS,
            d.operating_hours_per_year,
        )?,
        coal_price_per_ton: read_f64_default(tr, keys::PROMPT_COAL_PRICE, d.coal_price_per_ton)?,
        gas_price_per_m3: read_f64_default(tr, keys::PROMPT_GAS_PRICE, d.gas_price_per_m3)?,
    };
    let report = fuel_switch::analyze(&input)?;
    print_report(tr, &report);
    Ok(())
}

fn print_report(tr: &Translator, report: &FuelSwitchReport) {
    println!("{}", tr.t(keys::RESULT_COAL_HEADING));
    println!(
        "{} {:.2} kW",
        tr.t(keys::RESULT_CAPACITY_KW),
        report.boiler_capacity_kw
    );
    println!(
        "{} {:.2} kW",
        tr.t(keys::RESULT_AVG_KW),
        report.average_operating_kw
    );
    println!(
        "{} {:.2} kWh ({:.0} kJ)",
        tr.t(keys::RESULT_ANNUAL_ENERGY),
        report.annual_energy_kwh,
        report.annual_energy_kj
    );
    println!(
        "{} {:.2} ton",
        tr.t(keys::RESULT_COAL_CONSUMPTION),
        report.coal_consumption_tons
    );
    println!(
        "{} {:.2} ton",
        tr.t(keys::RESULT_COAL_EMISSIONS),
        report.coal_emissions_tons
    );
    println!("{} {:.2}", tr.t(keys::RESULT_COAL_COST), report.coal_cost);

    println!("{}", tr.t(keys::RESULT_GAS_HEADING));
    println!(
        "{} {:.2} m3",
        tr.t(keys::RESULT_GAS_CONSUMPTION),
        report.gas_consumption_m3
    );
    println!(
        "{} {:.2} ton",
        tr.t(keys::RESULT_GAS_EMISSIONS),
        report.gas_emissions_tons
    );
    println!("{} {:.2}", tr.t(keys::RESULT_GAS_COST), report.gas_cost);

    println!("{}", tr.t(keys::RESULT_COMPARISON_HEADING));
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_COST_DIFFERENCE),
        report.cost_difference
    );
    println!(
        "{} {:.2} ton",
        tr.t(keys::RESULT_EMISSIONS_REDUCTION),
        report.emissions_reduction_tons
    );
    match report.break_even_co2_price {
        BreakEvenCo2Price::Applicable(price) => {
            println!("{} {:.2} /ton CO2", tr.t(keys::RESULT_BREAK_EVEN), price);
        }
        BreakEvenCo2Price::NotApplicable => {
            println!(
                "{} {}",
                tr.t(keys::RESULT_BREAK_EVEN),
                tr.t(keys::BREAK_EVEN_NOT_APPLICABLE)
            );
        }
        BreakEvenCo2Price::Undefined => {
            println!(
                "{} {}",
                tr.t(keys::RESULT_BREAK_EVEN),
                tr.t(keys::BREAK_EVEN_UNDEFINED)
            );
        }
    }
}

/// 일일 운전시간 시계열 메뉴를 처리한다.
pub fn handle_daily_hours(tr: &Translator, cfg: &Config, seed: Option<u64>) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DAILY_HOURS_HEADING));
    println!("{}", tr.t(keys::DAILY_HOURS_NOTE));
    let annual = read_f64_default(
        tr,
        keys::PROMPT_ANNUAL_HOURS,
        cfg.defaults.operating_hours_per_year,
    )?;
    let seed = match seed {
        Some(s) => Some(s),
        None => read_optional_seed(tr)?,
    };
    let input = OperatingHoursInput {
        annual_operating_hours: annual,
        seed,
    };
    let series = operating_hours::sample_daily_operating_hours(&input)?;
    print_series(tr, &series)?;
    Ok(())
}

fn print_series(tr: &Translator, series: &[DailyOperatingHours]) -> Result<(), AppError> {
    let mean = series.iter().map(|s| s.hours).sum::<f64>() / series.len() as f64;
    let min = series.iter().map(|s| s.hours).fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .map(|s| s.hours)
        .fold(f64::NEG_INFINITY, f64::max);
    println!("{} {:.2} h", tr.t(keys::SERIES_MEAN), mean);
    println!("{} {:.2} h", tr.t(keys::SERIES_MIN), min);
    println!("{} {:.2} h", tr.t(keys::SERIES_MAX), max);
    let answer = read_line(tr.t(keys::PROMPT_PRINT_FULL_SERIES))?;
    if answer.trim().eq_ignore_ascii_case("y") {
        for sample in series {
            println!("{}  {:.2}", sample.date, sample.hours);
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or(tr.language_code())
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let lang = match sel.trim() {
        "1" => "ko",
        "2" => "en",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = Some(lang.to_string());
    println!("{} {lang}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_default(tr: &Translator, prompt_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(prompt_key)))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_seed(tr: &Translator) -> Result<Option<u64>, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_SEED))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_SEED)),
        }
    }
}
