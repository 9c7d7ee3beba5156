use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FUEL_SWITCH: &str = "main_menu.fuel_switch";
    pub const MAIN_MENU_DAILY_HOURS: &str = "main_menu.daily_hours";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FUEL_SWITCH_HEADING: &str = "fuel_switch.heading";
    pub const FUEL_SWITCH_NOTE_DEFAULTS: &str = "fuel_switch.note_defaults";
    pub const PROMPT_COAL_LHV: &str = "prompt.coal_lhv";
    pub const PROMPT_GAS_LHV: &str = "prompt.gas_lhv";
    pub const PROMPT_COAL_EMISSION_FACTOR: &str = "prompt.coal_emission_factor";
    pub const PROMPT_GAS_EMISSION_FACTOR: &str = "prompt.gas_emission_factor";
    pub const PROMPT_CAPACITY_BHP: &str = "prompt.capacity_bhp";
    pub const PROMPT_EFFICIENCY_COAL: &str = "prompt.efficiency_coal";
    pub const PROMPT_EFFICIENCY_GAS: &str = "prompt.efficiency_gas";
    pub const PROMPT_AVERAGE_LOAD: &str = "prompt.average_load";
    pub const PROMPT_ANNUAL_HOURS: &str = "prompt.annual_hours";
    pub const PROMPT_COAL_PRICE: &str = "prompt.coal_price";
    pub const PROMPT_GAS_PRICE: &str = "prompt.gas_price";

    pub const RESULT_COAL_HEADING: &str = "result.coal_heading";
    pub const RESULT_GAS_HEADING: &str = "result.gas_heading";
    pub const RESULT_COMPARISON_HEADING: &str = "result.comparison_heading";
    pub const RESULT_CAPACITY_KW: &str = "result.capacity_kw";
    pub const RESULT_AVG_KW: &str = "result.avg_kw";
    pub const RESULT_ANNUAL_ENERGY: &str = "result.annual_energy";
    pub const RESULT_COAL_CONSUMPTION: &str = "result.coal_consumption";
    pub const RESULT_COAL_EMISSIONS: &str = "result.coal_emissions";
    pub const RESULT_COAL_COST: &str = "result.coal_cost";
    pub const RESULT_GAS_CONSUMPTION: &str = "result.gas_consumption";
    pub const RESULT_GAS_EMISSIONS: &str = "result.gas_emissions";
    pub const RESULT_GAS_COST: &str = "result.gas_cost";
    pub const RESULT_COST_DIFFERENCE: &str = "result.cost_difference";
    pub const RESULT_EMISSIONS_REDUCTION: &str = "result.emissions_reduction";
    pub const RESULT_BREAK_EVEN: &str = "result.break_even";
    pub const BREAK_EVEN_NOT_APPLICABLE: &str = "result.break_even_not_applicable";
    pub const BREAK_EVEN_UNDEFINED: &str = "result.break_even_undefined";

    pub const DAILY_HOURS_HEADING: &str = "daily_hours.heading";
    pub const DAILY_HOURS_NOTE: &str = "daily_hours.note";
    pub const PROMPT_SEED: &str = "prompt.seed";
    pub const SERIES_MEAN: &str = "series.mean";
    pub const SERIES_MIN: &str = "series.min";
    pub const SERIES_MAX: &str = "series.max";
    pub const PROMPT_PRINT_FULL_SERIES: &str = "prompt.print_full_series";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_SEED: &str = "error.invalid_seed";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Boiler Fuel Switch Analyzer ===",
        MAIN_MENU_FUEL_SWITCH => "1) 연료 전환 분석 (석탄 → 천연가스)",
        MAIN_MENU_DAILY_HOURS => "2) 일일 운전시간 시계열",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FUEL_SWITCH_HEADING => "\n-- 연료 전환 분석 --",
        FUEL_SWITCH_NOTE_DEFAULTS => "참고: 값 없이 엔터를 누르면 괄호 안의 기본값을 사용합니다.",
        PROMPT_COAL_LHV => "석탄 저위발열량 PCI [kJ/kg]",
        PROMPT_GAS_LHV => "천연가스 저위발열량 PCI [kJ/m3]",
        PROMPT_COAL_EMISSION_FACTOR => "석탄 배출계수 [kg CO2/kg]",
        PROMPT_GAS_EMISSION_FACTOR => "천연가스 배출계수 [kg CO2/m3]",
        PROMPT_CAPACITY_BHP => "보일러 정격용량 [BHP]",
        PROMPT_EFFICIENCY_COAL => "석탄 연소 시 보일러 효율 (0~1)",
        PROMPT_EFFICIENCY_GAS => "가스 연소 시 보일러 효율 (0~1)",
        PROMPT_AVERAGE_LOAD => "평균 부하율 (0~1)",
        PROMPT_ANNUAL_HOURS => "연간 운전시간 [h]",
        PROMPT_COAL_PRICE => "석탄 단가 [/ton]",
        PROMPT_GAS_PRICE => "천연가스 단가 [/m3]",
        RESULT_COAL_HEADING => "\n-- 석탄 기준 결과 --",
        RESULT_GAS_HEADING => "\n-- 천연가스 기준 결과 --",
        RESULT_COMPARISON_HEADING => "\n-- 비교 --",
        RESULT_CAPACITY_KW => "보일러 용량:",
        RESULT_AVG_KW => "평균 운전 출력:",
        RESULT_ANNUAL_ENERGY => "연간 유효 에너지:",
        RESULT_COAL_CONSUMPTION => "석탄 소비량:",
        RESULT_COAL_EMISSIONS => "석탄 CO2 배출량:",
        RESULT_COAL_COST => "석탄 연료비:",
        RESULT_GAS_CONSUMPTION => "가스 소비량:",
        RESULT_GAS_EMISSIONS => "가스 CO2 배출량:",
        RESULT_GAS_COST => "가스 연료비:",
        RESULT_COST_DIFFERENCE => "비용 차이 (가스 - 석탄):",
        RESULT_EMISSIONS_REDUCTION => "연간 CO2 저감량:",
        RESULT_BREAK_EVEN => "손익분기 CO2 가격:",
        BREAK_EVEN_NOT_APPLICABLE => "해당 없음 (가스가 이미 더 싸거나 같습니다)",
        BREAK_EVEN_UNDEFINED => "정의 불가 (배출 저감량이 0입니다)",
        DAILY_HOURS_HEADING => "\n-- 일일 운전시간 시계열 --",
        DAILY_HOURS_NOTE => "참고: 시각화용 합성 데이터이며 합계가 연간값과 일치하지 않을 수 있습니다.",
        PROMPT_SEED => "난수 시드 (엔터=무작위): ",
        SERIES_MEAN => "일평균:",
        SERIES_MIN => "최소:",
        SERIES_MAX => "최대:",
        PROMPT_PRINT_FULL_SERIES => "전체 365일을 출력할까요? (y/N): ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다. 다음 실행부터 적용됩니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_SEED => "정수 시드를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Boiler Fuel Switch Analyzer ===",
        MAIN_MENU_FUEL_SWITCH => "1) Fuel-switch analysis (coal → natural gas)",
        MAIN_MENU_DAILY_HOURS => "2) Daily operating-hours series",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FUEL_SWITCH_HEADING => "\n-- Fuel-Switch Analysis --",
        FUEL_SWITCH_NOTE_DEFAULTS => "Note: press enter without a value to use the default in brackets.",
        PROMPT_COAL_LHV => "Coal LHV (PCI) [kJ/kg]",
        PROMPT_GAS_LHV => "Natural gas LHV (PCI) [kJ/m3]",
        PROMPT_COAL_EMISSION_FACTOR => "Coal emission factor [kg CO2/kg]",
        PROMPT_GAS_EMISSION_FACTOR => "Natural gas emission factor [kg CO2/m3]",
        PROMPT_CAPACITY_BHP => "Boiler rated capacity [BHP]",
        PROMPT_EFFICIENCY_COAL => "Boiler efficiency on coal (0~1)",
        PROMPT_EFFICIENCY_GAS => "Boiler efficiency on gas (0~1)",
        PROMPT_AVERAGE_LOAD => "Average load fraction (0~1)",
        PROMPT_ANNUAL_HOURS => "Operating hours per year [h]",
        PROMPT_COAL_PRICE => "Coal price [/ton]",
        PROMPT_GAS_PRICE => "Natural gas price [/m3]",
        RESULT_COAL_HEADING => "\n-- Coal Results --",
        RESULT_GAS_HEADING => "\n-- Natural Gas Results --",
        RESULT_COMPARISON_HEADING => "\n-- Comparison --",
        RESULT_CAPACITY_KW => "Boiler capacity:",
        RESULT_AVG_KW => "Average operating power:",
        RESULT_ANNUAL_ENERGY => "Annual useful energy:",
        RESULT_COAL_CONSUMPTION => "Coal consumption:",
        RESULT_COAL_EMISSIONS => "Coal CO2 emissions:",
        RESULT_COAL_COST => "Coal fuel cost:",
        RESULT_GAS_CONSUMPTION => "Gas consumption:",
        RESULT_GAS_EMISSIONS => "Gas CO2 emissions:",
        RESULT_GAS_COST => "Gas fuel cost:",
        RESULT_COST_DIFFERENCE => "Cost difference (gas - coal):",
        RESULT_EMISSIONS_REDUCTION => "Annual CO2 reduction:",
        RESULT_BREAK_EVEN => "Break-even CO2 price:",
        BREAK_EVEN_NOT_APPLICABLE => "not applicable (gas is already cheaper or equal)",
        BREAK_EVEN_UNDEFINED => "undefined (emissions reduction is zero)",
        DAILY_HOURS_HEADING => "\n-- Daily Operating-Hours Series --",
        DAILY_HOURS_NOTE => "Note: synthetic data for visualization; the sum may not match the annual figure.",
        PROMPT_SEED => "Random seed (enter = random): ",
        SERIES_MEAN => "Daily mean:",
        SERIES_MIN => "Min:",
        SERIES_MAX => "Max:",
        PROMPT_PRINT_FULL_SERIES => "Print all 365 days? (y/N): ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed; takes effect from the next run:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_SEED => "Please enter an integer seed.",
        _ => return None,
    })
}
