use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokenbridge_tokens::{BuildOptions, ConflictPolicy, SourceShape, UnitConversion};

pub const DEFAULT_CONFIG_NAME: &str = "tokenbridge.config.json";

/// Tokenbridge configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Token source file exported from the design tool
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory receiving emitted variable files
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Directory receiving generated per-component stylesheets
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    /// Structural path segments (theme label, mode label) dropped when
    /// collapsing names; the category segment comes right after them
    #[serde(default = "default_prefix_segments")]
    pub prefix_segments: usize,

    /// Unit normalization applied to dimension tokens
    #[serde(default)]
    pub unit_conversion: UnitConversion,

    /// Base font size for px/rem translation
    #[serde(default = "default_rem_base")]
    pub rem_base: f64,

    /// Emit one file per category instead of a single consolidated file
    #[serde(default)]
    pub split_by_category: bool,

    /// What to do when two tokens collapse to the same variable name
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

fn default_source() -> String {
    "src/shared/styles/tokens/tokens.json".to_string()
}

fn default_build_dir() -> String {
    "src/shared/styles/generated".to_string()
}

fn default_components_dir() -> String {
    "src/shared/ui".to_string()
}

fn default_prefix_segments() -> usize {
    2
}

fn default_rem_base() -> f64 {
    tokenbridge_tokens::DEFAULT_REM_BASE
}

impl Config {
    /// Load config from a directory, falling back to defaults when no
    /// config file exists
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        Self::load_from(cwd, None)
    }

    /// Load config, optionally from an explicit path instead of the
    /// default file name. An explicit path that doesn't exist is an error;
    /// a missing default file just means defaults.
    pub fn load_from(cwd: &str, path: Option<&str>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(cwd).join(p),
            None => PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else if path.is_some() {
            Err(anyhow::anyhow!("Config file not found: {}", config_path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn source_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.source)
    }

    pub fn build_dir_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.build_dir)
    }

    pub fn components_dir_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.components_dir)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            shape: SourceShape {
                prefix_segments: self.prefix_segments,
            },
            conversion: self.unit_conversion,
            rem_base: self.rem_base,
            split_by_category: self.split_by_category,
            conflict_policy: self.conflict_policy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            build_dir: default_build_dir(),
            components_dir: default_components_dir(),
            prefix_segments: default_prefix_segments(),
            unit_conversion: UnitConversion::default(),
            rem_base: default_rem_base(),
            split_by_category: false,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}
