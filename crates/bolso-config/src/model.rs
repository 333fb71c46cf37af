use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences and storage locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root for the local JSON records. Defaults to the
    /// platform data directory under `bolso/`.
    pub data_root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for generated reports. Defaults to the
    /// user's documents directory.
    pub report_root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<MirrorSettings>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            data_root: None,
            report_root: None,
            mirror: None,
        }
    }
}

impl Config {
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("bolso")
    }

    pub fn resolve_report_root(&self) -> PathBuf {
        if let Some(path) = &self.report_root {
            return path.clone();
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Connection settings for the optional remote mirror.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MirrorSettings {
    pub url: String,
    pub api_key: String,
}
