//! 訓練/測試集切分器
//!
//! 第一欄視為識別碼並捨棄，最後一欄為目標欄，其餘為特徵欄。
//! 行索引以 `StdRng::seed_from_u64(seed)` 進行 Fisher-Yates 洗牌，
//! 前 `ceil(test_split * n)` 個索引進入測試集，其餘進入訓練集。

use super::error::{DatasetError, DatasetResult};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, error, info};

/// 切分結果
#[derive(Debug, Clone)]
pub struct SplitResult {
    pub train: DataFrame,
    pub test: DataFrame,
}

impl SplitResult {
    /// 取得切分摘要
    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            train_rows: self.train.height(),
            test_rows: self.test.height(),
        }
    }
}

/// 切分摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    pub train_rows: usize,
    pub test_rows: usize,
}

impl SplitSummary {
    /// 實際測試集比例
    pub fn test_fraction(&self) -> f64 {
        let total = self.train_rows + self.test_rows;
        if total == 0 {
            return 0.0;
        }
        self.test_rows as f64 / total as f64
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "訓練集 {} 行, 測試集 {} 行 (測試比例 {:.3})",
            self.train_rows,
            self.test_rows,
            self.test_fraction()
        )
    }
}

/// 以固定種子進行可重現切分的切分器
#[derive(Debug, Clone, Copy)]
pub struct TrainTestSplitter {
    test_split: f64,
    seed: u64,
}

impl TrainTestSplitter {
    /// 創建新的切分器
    pub fn new(test_split: f64, seed: u64) -> Self {
        Self { test_split, seed }
    }

    /// 切分資料集
    pub fn split(&self, data: &DataFrame) -> DatasetResult<SplitResult> {
        match self.try_split(data) {
            Ok(result) => {
                info!("資料集切分完成: {}", result.summary());
                Ok(result)
            }
            Err(err) => {
                error!(
                    "資料集切分失敗 (test_split={}, seed={}): {}",
                    self.test_split, self.seed, err
                );
                Err(err)
            }
        }
    }

    fn try_split(&self, data: &DataFrame) -> DatasetResult<SplitResult> {
        let (n_rows, n_cols) = data.shape();

        if n_cols < 2 {
            return Err(DatasetError::Value(format!(
                "資料集至少需要 2 欄, 實際為 {}",
                n_cols
            )));
        }
        if n_rows < 2 {
            return Err(DatasetError::Value(format!(
                "資料集至少需要 2 行, 實際為 {}",
                n_rows
            )));
        }

        let (n_train, n_test) = self.split_sizes(n_rows)?;

        // 捨棄識別碼欄, 特徵在前, 目標欄在最後
        let names: Vec<PlSmallStr> = data
            .get_column_names()
            .into_iter()
            .cloned()
            .collect();
        let target = names[n_cols - 1].clone();
        let mut columns: Vec<PlSmallStr> = names[1..n_cols - 1].to_vec();
        columns.push(target);
        let frame = data.select(columns)?;

        let indices = self.permutation(n_rows);
        let (test_idx, train_idx) = indices.split_at(n_test);
        debug!("切分索引: {} 訓練, {} 測試", n_train, n_test);

        let test = frame.take(&IdxCa::from_vec("test".into(), test_idx.to_vec()))?;
        let train = frame.take(&IdxCa::from_vec("train".into(), train_idx.to_vec()))?;

        Ok(SplitResult { train, test })
    }

    /// 計算 (訓練行數, 測試行數)
    pub fn split_sizes(&self, n_rows: usize) -> DatasetResult<(usize, usize)> {
        if !(self.test_split > 0.0 && self.test_split < 1.0) {
            return Err(DatasetError::Value(format!(
                "test_split 必須介於 0 與 1 之間 (不含端點), 實際為 {}",
                self.test_split
            )));
        }

        let n_test = (self.test_split * n_rows as f64).ceil() as usize;
        let n_train = n_rows.saturating_sub(n_test);

        if n_test == 0 || n_train == 0 {
            return Err(DatasetError::Value(format!(
                "在 {} 行上以 test_split={} 切分會產生空的訓練集或測試集",
                n_rows, self.test_split
            )));
        }

        Ok((n_train, n_test))
    }

    /// 以種子產生 `0..n_rows` 的排列
    fn permutation(&self, n_rows: usize) -> Vec<IdxSize> {
        let mut indices: Vec<IdxSize> = (0..n_rows as IdxSize).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);
        indices
    }
}
