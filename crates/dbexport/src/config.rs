//! YAML configuration loading and validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{ExportError, Result};

/// Top-level export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source dialect tag, e.g. "mysql" or "sqlite".
    pub dialect: String,

    /// Tables to skip entirely.
    #[serde(default)]
    pub exclude_tables: Vec<String>,

    /// Store decimals as lossy REAL instead of TEXT in SQLite output.
    #[serde(default)]
    pub decimal_as_real: bool,

    /// Output artifact locations.
    #[serde(default)]
    pub outputs: OutputConfig,
}

/// Where generated artifacts are written. All paths are relative to `dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_mysql_sql")]
    pub mysql_sql: String,

    #[serde(default = "default_sqlite_sql")]
    pub sqlite_sql: String,

    #[serde(default = "default_schemas")]
    pub schemas: String,

    #[serde(default = "default_json")]
    pub json: String,
}

fn default_dir() -> String {
    ".".to_string()
}

fn default_mysql_sql() -> String {
    "mysql_table.sql".to_string()
}

fn default_sqlite_sql() -> String {
    "sqlite_table.sql".to_string()
}

fn default_schemas() -> String {
    "schemas.py".to_string()
}

fn default_json() -> String {
    "data.json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            mysql_sql: default_mysql_sql(),
            sqlite_sql: default_sqlite_sql(),
            schemas: default_schemas(),
            json: default_json(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&text)?;
        debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The parsed source dialect.
    pub fn dialect(&self) -> Result<Dialect> {
        self.dialect.parse()
    }

    fn validate(&self) -> Result<()> {
        self.dialect()?;
        if self.outputs.dir.is_empty() {
            return Err(ExportError::Config(
                "outputs.dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
