use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::debug;

use crate::config::types::ParamsConfig;
use crate::config::validation::Validator;
use crate::data_ingestion::DatasetResult;

/// 配置檔名
pub const PARAMS_FILE_NAME: &str = "params.yaml";

/// 環境變數前綴, 例如 `MAKE_DATASET_MAKE_DATASET__SEED=7`
pub const ENV_PREFIX: &str = "MAKE_DATASET";

/// 配置加載器, 讀取 params.yaml 並疊加環境變數
pub struct ConfigLoader;

impl ConfigLoader {
    /// 載入指定路徑的配置來源
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("從 {} 加載配置", path.display());

        Config::builder()
            .add_source(File::from(path))
            // 從環境變數加載配置（優先級高於文件配置）
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
    }

    /// 載入並驗證完整配置
    pub fn load_params<P: AsRef<Path>>(path: P) -> DatasetResult<ParamsConfig> {
        let params: ParamsConfig = Self::load(path)?.try_deserialize()?;
        params.validate()?;
        Ok(params)
    }
}
