use crate::core::birthdays::DEFAULT_WINDOW_DAYS;
use crate::domain::model::LeapDayPolicy;
use crate::utils::error::{BookError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "address_book.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub birthdays: Option<BirthdaysConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdaysConfig {
    pub window_days: Option<u32>,
    pub leap_day: Option<LeapDayPolicy>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數: `${VAR}` 或帶預設值的 `${VAR:-fallback}`
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").map_err(|e| {
            BookError::ConfigError {
                message: e.to_string(),
            }
        })?;

        let mut result = String::with_capacity(content.len());
        let mut last = 0;
        for caps in re.captures_iter(content) {
            let whole = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            let value = match (std::env::var(&caps[1]), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(fallback)) => fallback.as_str().to_string(),
                (Err(_), None) => {
                    return Err(BookError::ConfigError {
                        message: format!("environment variable in {} is not set", whole),
                    })
                }
            };
            result.push_str(&content[last..start]);
            result.push_str(&value);
            last = start + whole.len();
        }
        result.push_str(&content[last..]);

        Ok(result)
    }

    pub fn data_file(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .unwrap_or(DEFAULT_DATA_FILE)
    }

    pub fn window_days(&self) -> u32 {
        self.birthdays
            .as_ref()
            .and_then(|b| b.window_days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    pub fn leap_day(&self) -> LeapDayPolicy {
        self.birthdays
            .as_ref()
            .and_then(|b| b.leap_day)
            .unwrap_or_default()
    }

    pub fn set_data_file(&mut self, path: impl Into<String>) {
        self.storage = Some(StorageConfig {
            path: Some(path.into()),
        });
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.path", self.data_file())?;
        validate_range("birthdays.window_days", self.window_days(), 1, 366)?;
        Ok(())
    }
}
