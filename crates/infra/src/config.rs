//! Configuration loading and representation.
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional TOML
//! file (`config/lemonpos.toml` unless a path is given), then environment
//! variables prefixed `LEMONPOS__` (e.g. `LEMONPOS__DATA_DIR=/var/lib/till`).

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use lemonpos_core::{DomainError, Money};
use lemonpos_observability::LogFormat;
use lemonpos_products::{Catalog, Product};
use lemonpos_sales::DEFAULT_MAX_LINE_QUANTITY;

pub const DEFAULT_CONFIG_FILE: &str = "config/lemonpos.toml";
pub const ENV_PREFIX: &str = "LEMONPOS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

/// One menu entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    /// Decimal price, e.g. `"4.50"`.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    /// Directory for generated per-run order logs.
    pub data_dir: PathBuf,
    /// Fixed order log path; overrides the generated per-run name.
    pub data_file: Option<PathBuf>,
    pub max_line_quantity: u32,
    pub log_format: LogFormat,
    /// Menu; the lemonade stand menu when absent.
    pub catalog: Option<Vec<ProductConfig>>,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            data_file: None,
            max_line_quantity: DEFAULT_MAX_LINE_QUANTITY,
            log_format: LogFormat::default(),
            catalog: None,
        }
    }
}

impl PosConfig {
    /// Load from file + environment.
    ///
    /// An explicitly given `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: PosConfig = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_line_quantity == 0 {
            return Err(DomainError::validation("max_line_quantity must be at least 1"));
        }
        self.build_catalog().map(|_| ())
    }

    pub fn build_catalog(&self) -> Result<Catalog, DomainError> {
        let Some(entries) = &self.catalog else {
            return Ok(Catalog::lemonade_stand());
        };

        let products = entries
            .iter()
            .map(|entry| {
                let price: Money = entry.price.parse().map_err(|e| {
                    DomainError::validation(format!("price of '{}': {e}", entry.name))
                })?;
                Product::new(entry.name.as_str(), entry.emoji.as_str(), price)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(products)
    }

    /// Order log location for a process started at `started_at`.
    ///
    /// Without an explicit `data_file`, each run gets its own
    /// `orders_<YYYYmmdd_HHMMSS>.csv` inside `data_dir`.
    pub fn order_log_path(&self, started_at: NaiveDateTime) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => self
                .data_dir
                .join(format!("orders_{}.csv", started_at.format("%Y%m%d_%H%M%S"))),
        }
    }
}
