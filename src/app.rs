use crate::boiler::fuel_switch;
use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::sampling::operating_hours;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 분석 입력 검증 오류
    Input(fuel_switch::InputError),
    /// 시계열 샘플러 오류
    Sampler(operating_hours::SamplerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 오류: {e}"),
            AppError::Sampler(e) => write!(f, "시계열 생성 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<fuel_switch::InputError> for AppError {
    fn from(value: fuel_switch::InputError) -> Self {
        AppError::Input(value)
    }
}

impl From<operating_hours::SamplerError> for AppError {
    fn from(value: operating_hours::SamplerError) -> Self {
        AppError::Sampler(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, seed: Option<u64>) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::FuelSwitch => ui_cli::handle_fuel_switch(tr, config)?,
            MenuChoice::DailyHours => ui_cli::handle_daily_hours(tr, config, seed)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
