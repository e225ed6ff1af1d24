//! CSV 檔案讀取器

use super::error::{DatasetError, DatasetResult};
use polars::prelude::*;
use std::path::Path;
use tracing::{error, info};

/// CSV 讀取器配置
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// 是否有標題行
    pub has_header: bool,
    /// 分隔符
    pub separator: u8,
    /// 推斷模式類型所用的行數, None 表示掃描全部行
    pub infer_schema_length: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
            infer_schema_length: None,
        }
    }
}

/// CSV 資料集讀取器
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: LoaderConfig,
}

impl CsvLoader {
    fn read_options(&self) -> CsvReadOptions {
        CsvReadOptions::default()
            .with_has_header(self.config.has_header)
            .with_parse_options(CsvParseOptions::default().with_separator(self.config.separator))
            .with_infer_schema_length(self.config.infer_schema_length)
    }

    /// 從檔案路徑讀取資料集，保留欄位與行的原始順序
    pub fn load<P: AsRef<Path>>(&self, path: P) -> DatasetResult<DataFrame> {
        let path = path.as_ref();

        match self.read_file(path) {
            Ok(df) => {
                info!(
                    "已載入資料集 {} ({} 行 x {} 欄)",
                    path.display(),
                    df.height(),
                    df.width()
                );
                Ok(df)
            }
            Err(err) => {
                error!("載入資料集失敗 {}: {}", path.display(), err);
                Err(err)
            }
        }
    }

    fn read_file(&self, path: &Path) -> DatasetResult<DataFrame> {
        if !path.exists() {
            return Err(DatasetError::io(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("檔案不存在: {}", path.display()),
                ),
            ));
        }

        self.read_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|e| DatasetError::parse(path, e))
    }
}
