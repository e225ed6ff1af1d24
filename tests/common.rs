use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 建立含 params.yaml 與 data/raw/heart.csv 的暫存專案根目錄
pub fn setup_project(rows: usize, test_split: f64, seed: u64) -> TempDir {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    write_params(home.path(), test_split, seed);
    write_heart_csv(&home.path().join("data/raw/heart.csv"), rows);
    home
}

pub fn write_params(home: &Path, test_split: f64, seed: u64) {
    let body = format!(
        "make_dataset:\n  test_split: {}\n  seed: {}\n",
        test_split, seed
    );
    fs::write(home.join("params.yaml"), body).expect("Failed to write params.yaml");
}

/// 寫出 `[id, age, chol, target]` 格式的資料, age 在各行間唯一
pub fn write_heart_csv(path: &Path, rows: usize) {
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create data dir");
    let mut body = String::from("id,age,chol,target\n");
    for i in 0..rows {
        body.push_str(&format!("{},{},{},{}\n", i + 1, 29 + i, 180 + 3 * i, i % 2));
    }
    fs::write(path, body).expect("Failed to write heart.csv");
}

pub fn output_dir(home: &Path) -> PathBuf {
    home.join("data/external")
}

/// 讀取 CSV 為 (標題, 資料行)
pub fn read_csv_lines(path: &Path) -> (String, Vec<String>) {
    let content = fs::read_to_string(path).expect("Failed to read output csv");
    let mut lines = content.lines().map(str::to_string);
    let header = lines.next().unwrap_or_default();
    (header, lines.collect())
}
