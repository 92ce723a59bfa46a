use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub reference: ReferenceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// CSV export with one row per order line
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Fixed dates bounding every date selection of the dashboards.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceConfig {
    /// "Today" anchor
    pub date: NaiveDate,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
}

impl ReferenceConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.date_min > self.date || self.date > self.date_max {
            anyhow::bail!(
                "reference date {} must lie within [{}, {}]",
                self.date,
                self.date_min,
                self.date_max
            );
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
path = "data/data.csv"

[server]
port = 3000

[reference]
date = "2024-09-30"
date_min = "2023-01-01"
date_max = "2024-12-31"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.reference.validate()?;
    Ok(config)
}

/// Get the dataset file path from configuration
/// Relative paths are tried next to the executable first, then the current directory
pub fn get_data_path(config: &Config) -> PathBuf {
    let data_path = Path::new(&config.data.path);

    if data_path.is_absolute() {
        return data_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(data_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    data_path.to_path_buf()
}
