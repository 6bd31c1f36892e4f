//! Configuration management
//!
//! Config stored at: ~/.config/milho/config.json

use milho_domain::service::BAG_WEIGHT_KG;
use milho_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default business snapshot (JSON export of the business list)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Mass of one bag in kg, used for bag previews
    #[serde(default = "default_bag_weight_kg")]
    pub bag_weight_kg: f64,

    /// Directory for exported reports
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_bag_weight_kg() -> f64 {
    BAG_WEIGHT_KG
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            output_format: default_output_format(),
            bag_weight_kg: default_bag_weight_kg(),
            report_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("milho");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory where reports are written when no path is given
    pub fn report_dir(&self) -> Result<PathBuf> {
        match self.report_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::load_unchecked_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load without validating, so a bad value can still be repaired
    pub fn load_unchecked() -> Result<Self> {
        Self::load_unchecked_from(&Self::config_path()?)
    }

    pub fn load_unchecked_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bag_weight_kg.is_finite() && self.bag_weight_kg > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "bag_weight_kg must be positive, got {}",
                self.bag_weight_kg
            ))
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Milho Configuration")?;
        writeln!(f, "===================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data file:      {}",
            self.data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Bag weight:     {} kg", self.bag_weight_kg)?;
        writeln!(
            f,
            "Report dir:     {}",
            self.report_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
