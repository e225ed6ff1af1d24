//! 資料集準備流程編排
//!
//! 依序執行 載入 → 切分 → 寫出, 任一階段失敗即中止。

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{MakeDatasetConfig, PARAMS_FILE_NAME};
use crate::data_ingestion::{
    CsvLoader, CsvSaver, DatasetError, DatasetResult, SavedPaths, SplitSummary, TrainTestSplitter,
};

/// 相對專案根目錄的輸入檔
pub const INPUT_FILE: &str = "data/raw/heart.csv";
/// 相對專案根目錄的輸出目錄
pub const OUTPUT_DIR: &str = "data/external";

/// 執行檔相對專案根目錄的層數 (`<root>/target/<profile>/make_dataset`)
const HOME_DIR_DEPTH: usize = 3;

/// 流程所需的路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub params_file: PathBuf,
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

impl PipelinePaths {
    /// 以專案根目錄解析固定路徑
    pub fn from_home<P: AsRef<Path>>(home_dir: P) -> Self {
        let home_dir = home_dir.as_ref();
        Self {
            params_file: home_dir.join(PARAMS_FILE_NAME),
            input_file: home_dir.join(INPUT_FILE),
            output_dir: home_dir.join(OUTPUT_DIR),
        }
    }

    pub fn with_params_file(mut self, path: PathBuf) -> Self {
        self.params_file = path;
        self
    }

    pub fn with_input_file(mut self, path: PathBuf) -> Self {
        self.input_file = path;
        self
    }

    pub fn with_output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = path;
        self
    }
}

/// 由執行檔位置往上三層推得專案根目錄
pub fn home_dir_from_exe(exe: &Path) -> DatasetResult<PathBuf> {
    exe.ancestors()
        .nth(HOME_DIR_DEPTH)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            DatasetError::Config(format!(
                "無法由執行檔路徑 {} 推得專案根目錄",
                exe.display()
            ))
        })
}

/// 以目前執行檔位置推得專案根目錄
pub fn default_home_dir() -> DatasetResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| DatasetError::io("<current_exe>", e))?;
    home_dir_from_exe(&exe)
}

/// 流程執行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub summary: SplitSummary,
    pub saved: SavedPaths,
}

/// 資料集準備流程
#[derive(Debug, Clone)]
pub struct Pipeline {
    paths: PipelinePaths,
    loader: CsvLoader,
    splitter: TrainTestSplitter,
    saver: CsvSaver,
}

impl Pipeline {
    pub fn new(paths: PipelinePaths, config: MakeDatasetConfig) -> Self {
        Self {
            paths,
            loader: CsvLoader::default(),
            splitter: TrainTestSplitter::new(config.test_split, config.seed),
            saver: CsvSaver::new(),
        }
    }

    /// 依序執行三個階段
    pub fn run(&self) -> DatasetResult<PipelineReport> {
        let data = self.loader.load(&self.paths.input_file)?;
        let mut split = self.splitter.split(&data)?;
        let saved = self.saver.save(&mut split, &self.paths.output_dir)?;

        let report = PipelineReport {
            summary: split.summary(),
            saved,
        };
        info!(
            "資料集準備完成: {} -> {}",
            self.paths.input_file.display(),
            self.paths.output_dir.display()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_from_exe() {
        let exe = Path::new("/work/project/target/release/make_dataset");
        assert_eq!(home_dir_from_exe(exe).unwrap(), PathBuf::from("/work/project"));
    }

    #[test]
    fn test_home_dir_from_shallow_exe_fails() {
        assert!(home_dir_from_exe(Path::new("make_dataset")).is_err());
    }

    #[test]
    fn test_paths_from_home() {
        let paths = PipelinePaths::from_home("/work/project");
        assert_eq!(paths.params_file, PathBuf::from("/work/project/params.yaml"));
        assert_eq!(paths.input_file, PathBuf::from("/work/project/data/raw/heart.csv"));
        assert_eq!(paths.output_dir, PathBuf::from("/work/project/data/external"));
    }

    #[test]
    fn test_path_overrides() {
        let paths = PipelinePaths::from_home("/work/project")
            .with_input_file(PathBuf::from("/tmp/in.csv"))
            .with_output_dir(PathBuf::from("/tmp/out"));
        assert_eq!(paths.input_file, PathBuf::from("/tmp/in.csv"));
        assert_eq!(paths.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(paths.params_file, PathBuf::from("/work/project/params.yaml"));
    }
}
