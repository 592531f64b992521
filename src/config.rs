use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::isolation::{MaterialGroup, StressType};

/// 설계 질의에서 생략 가능한 항목의 기본값을 담는다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DesignDefaults {
    /// 설치 고도(m)
    pub altitude_m: f64,
    /// 오염 등급(1~4)
    pub pollution_degree: u8,
    /// 과전압 카테고리(1~4)
    pub overvoltage_category: u8,
    /// 절연 재료 그룹
    pub material_group: MaterialGroup,
    /// 전압 스트레스 종류
    pub stress_type: StressType,
    /// 강화 절연 여부
    pub reinforced: bool,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            altitude_m: 2000.0,
            pollution_degree: 2,
            overvoltage_category: 2,
            material_group: MaterialGroup::IIIa,
            stress_type: StressType::Pulse,
            reinforced: false,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub defaults: DesignDefaults,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
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
