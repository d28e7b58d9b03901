use anyhow::Context;
use duid::DuidFormat;
use serde::{Deserialize, Serialize};

/// Configuration structure loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format specifier used when `--format` is not given (e.g. "L-")
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Print JSON reports instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_format() -> String {
    "U:".to_string()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.format()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// The parsed default format
    pub fn format(&self) -> anyhow::Result<DuidFormat> {
        self.default_format
            .parse::<DuidFormat>()
            .with_context(|| format!("invalid default_format {:?}", self.default_format))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            json: false,
        }
    }
}
