use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Lunara configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LunaraConfig {
    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,

    /// Harbor roster. When empty, the built-in roster applies.
    #[serde(default)]
    pub harbors: Vec<HarborToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: default_format(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarborToml {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tide_offset: i8,
    #[serde(default)]
    pub note: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}
fn default_format() -> String {
    "both".to_string()
}

/// Loads the configuration file, falling back to defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<LunaraConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LunaraConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
