/// 配置管理模組
///
/// 本模組負責從 params.yaml 加載並驗證資料集切分配置,
/// 環境變數 `MAKE_DATASET_*` 可覆寫文件中的值。
// 宣告子模組
pub mod loader;
pub mod types;
pub mod validation;

// 重新導出常用組件
pub use loader::{ConfigLoader, ENV_PREFIX, PARAMS_FILE_NAME};
pub use types::*;
pub use validation::{ValidationError, ValidationUtils, Validator};
