use serde::{Deserialize, Serialize};
use crate::config::validation::{ValidationError, ValidationUtils, Validator};

/// params.yaml 的完整結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsConfig {
    pub make_dataset: MakeDatasetConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validator for ParamsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.make_dataset.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

/// 資料集切分配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MakeDatasetConfig {
    /// 測試集比例, 必須介於 0 與 1 之間
    pub test_split: f64,
    /// 隨機種子
    pub seed: u64,
}

impl Validator for MakeDatasetConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::in_open_range(self.test_split, 0.0, 1.0, "make_dataset.test_split")?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::not_empty(&self.level, "log.level")?;
        ValidationUtils::one_of(
            &self.level.to_lowercase(),
            &["trace", "debug", "info", "warn", "error"],
            "log.level",
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(&self.format.to_lowercase(), &["pretty", "json"], "log.format")?;

        Ok(())
    }
}
