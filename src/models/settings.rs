//! The per-run configuration snapshot carried from the driver into the hook.

use std::path::PathBuf;

/// Flags that make hook behavior a pure function of the driver's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub domain: Option<String>,
    pub webserver: Option<String>,
    /// Configuration file actually used, if any.
    pub config: Option<PathBuf>,
}

impl RunSettings {
    /// Console domain, with an empty value treated as absent.
    pub fn console_domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    /// Web server unit, with an empty value treated as absent.
    pub fn webserver_unit(&self) -> Option<&str> {
        self.webserver.as_deref().filter(|w| !w.is_empty())
    }

    /// Arguments re-entering this program in hook mode with the same settings.
    pub fn hook_args(&self) -> Vec<String> {
        let mut args = vec!["-k".to_string()];
        if let Some(domain) = &self.domain {
            args.push("-d".to_string());
            args.push(domain.clone());
        }
        if let Some(webserver) = &self.webserver {
            args.push("-w".to_string());
            args.push(webserver.clone());
        }
        if let Some(config) = &self.config {
            args.push("-c".to_string());
            args.push(config.display().to_string());
        }
        args
    }
}
