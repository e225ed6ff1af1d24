use anyhow::{anyhow, Result};
use clap::Parser;
use make_dataset::config::{ConfigLoader, LogConfig};
use make_dataset::pipeline::{default_home_dir, Pipeline, PipelinePaths};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// 讀取資料集, 依比例與種子切分為訓練/測試集並寫出
#[derive(Debug, Parser)]
#[command(name = "make_dataset", version, about)]
struct Cli {
    /// 專案根目錄 (預設為執行檔往上三層)
    #[arg(long)]
    home_dir: Option<PathBuf>,

    /// 配置檔路徑 (預設為 <home>/params.yaml)
    #[arg(long)]
    params: Option<PathBuf>,

    /// 輸入 CSV (預設為 <home>/data/raw/heart.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// 輸出目錄 (預設為 <home>/data/external)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// 日誌級別, 覆寫配置檔中的 log.level
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 錯誤已在發生處記錄, 這裡只轉為退出碼
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    }
}

fn run(cli: Cli) -> Result<()> {
    let home_dir = match cli.home_dir {
        Some(dir) => Ok(dir),
        None => default_home_dir(),
    };

    let paths = home_dir.map(|home| {
        let mut paths = PipelinePaths::from_home(home);
        if let Some(params) = cli.params {
            paths = paths.with_params_file(params);
        }
        if let Some(input) = cli.input {
            paths = paths.with_input_file(input);
        }
        if let Some(output_dir) = cli.output_dir {
            paths = paths.with_output_dir(output_dir);
        }
        paths
    });

    let params = paths
        .as_ref()
        .map_err(|e| anyhow!("{}", e))
        .and_then(|paths| {
            ConfigLoader::load_params(&paths.params_file).map_err(|e| {
                anyhow!("無法加載配置 {}: {}", paths.params_file.display(), e)
            })
        });

    // 配置失敗時仍以預設日誌配置輸出錯誤
    let log_config = match &params {
        Ok(params) => params.log.clone(),
        Err(_) => LogConfig::default(),
    };
    if let Err(err) = init_logging(&log_config, cli.log_level.as_deref()) {
        eprintln!("{:#}", err);
        return Err(err);
    }

    // 各階段自行記錄失敗, 配置錯誤沒有對應階段, 在此記錄
    let params = params.inspect_err(|err| error!("{:#}", err))?;
    let paths = paths?;
    info!(
        "已加載配置: test_split={}, seed={}",
        params.make_dataset.test_split, params.make_dataset.seed
    );

    let report = Pipeline::new(paths, params.make_dataset).run()?;
    info!("{}", report.summary);

    Ok(())
}

// 初始化日誌系統
fn init_logging(log_config: &LogConfig, override_level: Option<&str>) -> Result<()> {
    let level = match override_level.unwrap_or(log_config.level.as_str()).to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // 默認為INFO
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let builder = FmtSubscriber::builder().with_env_filter(filter);

    let result = if log_config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))
}
