// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE_NAME: &str = "webtools.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub meta: MetaConfig,
    pub search: SearchConfig,
}

/// Which meta tag blocks are emitted unless a flag turns them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetaConfig {
    pub seo: bool,
    pub open_graph: bool,
    pub twitter: bool,
    pub viewport: bool,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            seo: true,
            open_graph: true,
            twitter: true,
            viewport: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// YAML tool catalog; the bundled catalog is used when unset.
    pub catalog: Option<PathBuf>,
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or contains unknown keys.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).context("Failed to parse configuration")
}

/// Loads configuration from an explicit path.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file contents are not a valid configuration
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Resolves the configuration to use.
///
/// An explicit path must exist. Otherwise `webtools.toml` in `dir` is used
/// when present, falling back to defaults.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "using config file");
        return load_config(path);
    }

    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        info!(path = %candidate.display(), "using config file");
        return load_config(&candidate);
    }

    info!("no config file found, using defaults");
    Ok(Config::default())
}
