use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub directive: DirectiveDefaults,
    pub assets: AssetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveDefaults {
    pub input_encoding: String,
    pub escape_values: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    pub static_dir: PathBuf,
    pub stylesheet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            directive: DirectiveDefaults {
                input_encoding: "utf-8".to_string(),
                escape_values: false,
            },
            assets: AssetConfig {
                static_dir: PathBuf::from("static"),
                stylesheet: "csv_list.css".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "plain".to_string(),
            },
        }
    }
}

impl ExtensionConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::CsvListError::Config(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::CsvListError::Config(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
