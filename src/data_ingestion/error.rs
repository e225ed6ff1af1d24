//! 資料集處理錯誤定義

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// 資料集處理錯誤類型
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("檔案存取錯誤: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 解析錯誤: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },

    #[error("無效的數值: {0}")]
    Value(String),

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("Polars 錯誤: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl DatasetError {
    /// 建立附帶路徑的 IO 錯誤
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.into(),
            source,
        }
    }

    /// 建立附帶路徑的解析錯誤
    pub fn parse(path: impl Into<PathBuf>, source: polars::error::PolarsError) -> Self {
        DatasetError::Parse {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for DatasetError {
    fn from(err: config::ConfigError) -> Self {
        DatasetError::Config(err.to_string())
    }
}

impl From<ValidationError> for DatasetError {
    fn from(err: ValidationError) -> Self {
        DatasetError::Config(err.to_string())
    }
}

/// 資料集處理結果類型
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = DatasetError::io(
            "data/raw/heart.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("data/raw/heart.csv"));
    }

    #[test]
    fn test_validation_error_maps_to_config() {
        let err: DatasetError = ValidationError::MissingField("make_dataset.seed".into()).into();
        match err {
            DatasetError::Config(msg) => assert!(msg.contains("make_dataset.seed")),
            other => panic!("Expected Config, got {:?}", other),
        }
    }
}
