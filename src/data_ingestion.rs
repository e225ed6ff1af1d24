//! 資料集準備流程
//!
//! 讀取 CSV → 捨棄識別碼欄並切分特徵/目標 → 依比例與種子切分訓練/測試集 → 寫出兩個 CSV。

pub mod error;
pub mod loader;
pub mod splitter;
pub mod writer;

pub use error::{DatasetError, DatasetResult};
pub use loader::{CsvLoader, LoaderConfig};
pub use splitter::{SplitResult, SplitSummary, TrainTestSplitter};
pub use writer::{CsvSaver, SavedPaths, TEST_FILE_NAME, TRAIN_FILE_NAME};
