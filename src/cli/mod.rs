//! CLI surface and mode dispatch.

use crate::constants;
use crate::core::config;
use crate::core::paths::SyncPaths;
use crate::models::config::CertsyncConfig;
use crate::models::settings::RunSettings;
use crate::util::journald;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

pub mod hook;
pub mod renew;

/// Shared context passed to both mode handlers.
pub struct CliContext {
    pub config: CertsyncConfig,
    pub paths: SyncPaths,
    pub settings: RunSettings,
}

impl CliContext {
    /// Forward a run summary to journald when enabled in the config.
    pub fn forward_summary(&self, record: &serde_json::Value) {
        if self.config.log.journald {
            journald::forward_json(constants::JOURNALD_TAG, record);
        }
    }
}

fn parse_domain(s: &str) -> Result<String, String> {
    if s.contains('/') || s.contains("..") {
        return Err("domain must be a certificate name, not a path".into());
    }
    Ok(s.to_string())
}

#[derive(Parser, Debug)]
#[command(
    name = "certsync",
    version,
    about = "Renew certificates and propagate them to the admin console and web server"
)]
pub struct Cli {
    /// Domain whose certificate is installed for the admin console
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN", value_parser = parse_domain)]
    pub domain: Option<String>,

    /// Web server unit to reload after a renewal
    #[arg(short = 'w', long = "webserver", value_name = "WEBSERVER")]
    pub webserver: Option<String>,

    /// Run as the post-renewal hook instead of driving a renewal
    #[arg(short = 'k', long = "hook")]
    pub hook: bool,

    /// Configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "CERTSYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Run the selected mode and return the process exit code.
    pub fn run(self) -> u8 {
        let (config_path, config) = match config::resolve(self.config) {
            Ok(resolved) => resolved,
            Err(e) => {
                error!("{:#}", e);
                return constants::EXIT_RUNTIME_ERROR;
            }
        };

        let ctx = CliContext {
            paths: SyncPaths::from_config(&config.paths),
            settings: RunSettings {
                domain: self.domain,
                webserver: self.webserver,
                config: config_path,
            },
            config,
        };

        if self.hook {
            hook::run(&ctx)
        } else {
            renew::run(&ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["certsync", "-k", "-d", "example.com", "-w", "nginx"]).unwrap();
        assert!(cli.hook);
        assert_eq!(cli.domain.as_deref(), Some("example.com"));
        assert_eq!(cli.webserver.as_deref(), Some("nginx"));
    }

    #[test]
    fn test_parse_accepts_empty_domain() {
        let cli = Cli::try_parse_from(["certsync", "-d", ""]).unwrap();
        assert_eq!(cli.domain.as_deref(), Some(""));
        assert!(!cli.hook);
    }

    #[test]
    fn test_parse_rejects_path_domain() {
        assert!(Cli::try_parse_from(["certsync", "-d", "../etc"]).is_err());
        assert!(Cli::try_parse_from(["certsync", "-d", "a/b"]).is_err());
    }

    #[test]
    fn test_parse_missing_value_is_usage_error() {
        let err = Cli::try_parse_from(["certsync", "-w"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_parse_unknown_flag_is_usage_error() {
        let err = Cli::try_parse_from(["certsync", "-x"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        let err = Cli::try_parse_from(["certsync", "-h"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
