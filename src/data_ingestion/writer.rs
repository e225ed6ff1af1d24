//! 訓練/測試集寫出

use super::error::{DatasetError, DatasetResult};
use super::splitter::SplitResult;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 訓練集檔名
pub const TRAIN_FILE_NAME: &str = "train_data.csv";
/// 測試集檔名
pub const TEST_FILE_NAME: &str = "test_data.csv";

/// 已寫出的檔案路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPaths {
    pub train: PathBuf,
    pub test: PathBuf,
}

/// CSV 寫出器，包含標題行且不寫出行索引
#[derive(Debug, Clone, Default)]
pub struct CsvSaver;

impl CsvSaver {
    pub fn new() -> Self {
        Self
    }

    /// 將切分結果寫入輸出目錄（目錄不存在時遞迴建立）
    pub fn save<P: AsRef<Path>>(&self, split: &mut SplitResult, out_dir: P) -> DatasetResult<SavedPaths> {
        let out_dir = out_dir.as_ref();

        match self.try_save(split, out_dir) {
            Ok(paths) => {
                info!("已寫出訓練/測試集至 {}", out_dir.display());
                Ok(paths)
            }
            Err(err) => {
                error!("寫出資料集失敗 {}: {}", out_dir.display(), err);
                Err(err)
            }
        }
    }

    fn try_save(&self, split: &mut SplitResult, out_dir: &Path) -> DatasetResult<SavedPaths> {
        fs::create_dir_all(out_dir).map_err(|e| DatasetError::io(out_dir, e))?;

        let paths = SavedPaths {
            train: out_dir.join(TRAIN_FILE_NAME),
            test: out_dir.join(TEST_FILE_NAME),
        };

        self.write_frame(&mut split.train, &paths.train)?;
        self.write_frame(&mut split.test, &paths.test)?;

        Ok(paths)
    }

    fn write_frame(&self, df: &mut DataFrame, path: &Path) -> DatasetResult<()> {
        let mut file = File::create(path).map_err(|e| DatasetError::io(path, e))?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .map_err(|e| DatasetError::io(path, std::io::Error::other(e)))
    }
}
