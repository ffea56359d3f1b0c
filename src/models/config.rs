//! Configuration file model.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CertsyncConfig {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub console: ConsoleSection,
    #[serde(default)]
    pub tools: ToolsSection,
    #[serde(default)]
    pub renew: RenewSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    /// Renewal client store, committed after every renewal.
    pub store_root: PathBuf,
    /// Parent of the per-domain certificate directories.
    pub live_root: PathBuf,
    /// Bundle file the console reads; its directory is committed too.
    pub console_bundle: PathBuf,
    pub renewal_log: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(constants::DEFAULT_STORE_ROOT),
            live_root: PathBuf::from(constants::DEFAULT_LIVE_ROOT),
            console_bundle: PathBuf::from(constants::DEFAULT_CONSOLE_BUNDLE),
            renewal_log: PathBuf::from(constants::DEFAULT_RENEWAL_LOG),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleSection {
    pub service: String,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            service: constants::DEFAULT_CONSOLE_SERVICE.to_string(),
        }
    }
}

/// Program names (or absolute paths) of the external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsSection {
    pub git: String,
    pub systemctl: String,
    pub certbot: String,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            systemctl: "systemctl".to_string(),
            certbot: "certbot".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RenewSection {
    /// Appended verbatim to the renewal client's command line.
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    /// Forward hook and renewal summaries to journald.
    pub journald: bool,
}
