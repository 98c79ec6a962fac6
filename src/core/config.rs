use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::snapshot::{AssemblyPolicy, DEFAULT_MOUNTS};
use crate::error::DashError;
use crate::ui::gauge::{Thresholds, DEFAULT_BAR_WIDTH};

const MAX_BAR_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Glyphs per usage bar
    pub bar_width: usize,
    /// CPU sampling window in milliseconds
    pub cpu_interval_ms: u64,
    pub thresholds: Thresholds,
    /// Mount points shown in the disk panel, matched exactly
    pub mounts: Vec<String>,
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            cpu_interval_ms: 1000,
            thresholds: Thresholds::default(),
            mounts: DEFAULT_MOUNTS.iter().map(|m| m.to_string()).collect(),
            color: true,
            clear_screen: true,
        }
    }
}

impl DashboardConfig {
    /// Load from the user config file, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing, empty or corrupt file yields defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let data = match fs::read_to_string(config_path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Cannot read config file {:?}: {}", config_path, e);
                return Ok(Self::default());
            }
        };

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(Self::parse(&data).unwrap_or_else(|e| {
            warn!("Ignoring config file {:?}: {}", config_path, e);
            Self::default()
        }))
    }

    /// Parse and validate config from a JSON string
    pub fn parse(data: &str) -> crate::error::Result<Self> {
        let config: DashboardConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.bar_width == 0 || self.bar_width > MAX_BAR_WIDTH {
            return Err(DashError::config(format!(
                "bar_width must be between 1 and {}, got {}",
                MAX_BAR_WIDTH, self.bar_width
            )));
        }
        if self.cpu_interval_ms == 0 {
            return Err(DashError::config("cpu_interval_ms must be greater than 0"));
        }
        if self.thresholds.warning > self.thresholds.critical {
            return Err(DashError::config(format!(
                "warning threshold ({}) must not exceed critical threshold ({})",
                self.thresholds.warning, self.thresholds.critical
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysdash").join("config.json"))
    }

    pub fn cpu_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_interval_ms)
    }

    pub fn assembly_policy(&self) -> AssemblyPolicy {
        AssemblyPolicy {
            mount_allow_list: self.mounts.clone(),
        }
    }
}
