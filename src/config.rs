use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::core::pipeline::hazards::HazardPolicy;

const DEFAULT_MAX_INSTRUCTIONS: usize = 20;
const DEFAULT_END_MARKER: &str = "<end>";

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,
    #[serde(default = "default_max_instructions")]
    pub max_instructions: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_instructions: default_max_instructions(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub hazard_policy: HazardPolicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
    #[serde(default)]
    pub show_stats: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            end_marker: default_end_marker(),
            show_stats: false,
        }
    }
}

fn default_max_instructions() -> usize {
    DEFAULT_MAX_INSTRUCTIONS
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}
