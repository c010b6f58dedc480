//! Extractor configuration, persisted as TOML.
//!
//! Defaults reproduce the plain pipeline exactly: every scammer message is
//! aggregated, nothing is truncated, and amounts stay out of the record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IntelError, IntelResult};

/// Tunables and vocabulary extensions for [`IntelligenceExtractor`](crate::intel::IntelligenceExtractor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Aggregate only the most recent N history messages. `None` keeps all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_window: Option<usize>,
    /// Cap on aggregated text, keeping the newest bytes. `None` is unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_text_bytes: Option<usize>,
    /// Run the category passes on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Populate the `amounts` field of the record.
    #[serde(default)]
    pub surface_amounts: bool,
    /// Additional UPI provider handles accepted by substring.
    #[serde(default)]
    pub extra_upi_providers: Vec<String>,
    /// Additional literal suspicious keywords.
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_parallel() -> bool {
    true
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            history_window: None,
            max_text_bytes: None,
            parallel: default_parallel(),
            surface_amounts: false,
            extra_upi_providers: Vec::new(),
            extra_keywords: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Parse from TOML text. `origin` names the source in errors.
    pub fn from_toml(content: &str, origin: &str) -> IntelResult<Self> {
        toml::from_str(content).map_err(|e| IntelError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> IntelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IntelError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> IntelResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> IntelResult<String> {
        toml::to_string_pretty(self).map_err(|e| IntelError::Serialization {
            message: e.to_string(),
        })
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> IntelResult<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| IntelError::ConfigWrite {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| IntelError::ConfigWrite {
            path: path.display().to_string(),
            source: e,
        })
    }
}
