use crate::config::Config;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 숫자 입력 해석 오류
    Parse(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Parse(s) => write!(f, "입력을 해석할 수 없음: {s}"),
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

/// 메인 메뉴 루프를 실행한다.
pub fn run(cfg: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Clearance => ui_cli::handle_clearance(cfg)?,
            MenuChoice::Creepage => ui_cli::handle_creepage(cfg)?,
            MenuChoice::CreepagePcb => ui_cli::handle_creepage_pcb(cfg)?,
            MenuChoice::ImpulseVoltage => ui_cli::handle_impulse_voltage(cfg)?,
            MenuChoice::EnergyClass => ui_cli::handle_energy_class()?,
            MenuChoice::TestVoltage => ui_cli::handle_test_voltage(cfg)?,
            MenuChoice::Acceleration => ui_cli::handle_acceleration()?,
            MenuChoice::ThermalRunaway => ui_cli::handle_thermal_runaway()?,
            MenuChoice::ValueParsing => ui_cli::handle_value_parsing()?,
            MenuChoice::Settings => ui_cli::handle_settings(cfg)?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}
