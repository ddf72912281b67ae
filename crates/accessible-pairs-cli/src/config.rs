//! Layered configuration: CLI flags over TOML file over defaults.

use accessible_pairs_core::{ContrastConfig, Enumeration};
use accessible_pairs_layout::RenderConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "accessible-pairs.toml";

/// Contents of `accessible-pairs.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Contrast engine settings
    pub(crate) contrast: ContrastConfig,
    /// Swatch scene settings
    pub(crate) render: RenderConfig,
}

impl Config {
    /// Parse from TOML text.
    pub(crate) fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the explicit file, else the default file if present, else defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides and validate the threshold.
    pub(crate) fn with_overrides(
        mut self,
        min_contrast: Option<f64>,
        unordered: bool,
    ) -> anyhow::Result<Self> {
        if let Some(min_contrast) = min_contrast {
            self.contrast.min_contrast = min_contrast;
        }
        if unordered {
            self.contrast.enumeration = Enumeration::Unordered;
        }
        self.contrast.validate()?;
        Ok(self)
    }
}
