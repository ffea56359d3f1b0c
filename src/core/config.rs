//! Loading and resolving the configuration file.

use crate::constants;
use crate::models::config::CertsyncConfig;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a configuration file.
pub fn load(path: &Path) -> Result<CertsyncConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
}

/// Resolve the configuration from an explicit path (flag or env), the
/// default location, or built-in defaults.
///
/// Returns the path actually used so it can be handed to the hook.
pub fn resolve(explicit: Option<PathBuf>) -> Result<(Option<PathBuf>, CertsyncConfig)> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("resolve config path {}", path.display()))?;
        let config = load(&path)?;
        return Ok((Some(path), config));
    }
    let default = PathBuf::from(constants::DEFAULT_CONFIG_PATH);
    if default.exists() {
        let config = load(&default)?;
        return Ok((Some(default), config));
    }
    Ok((None, CertsyncConfig::default()))
}
