//! Filesystem layout the hook reads from and writes into.

use crate::constants;
use crate::models::config::PathsSection;
use crate::util::path;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SyncPaths {
    pub store_root: PathBuf,
    pub live_root: PathBuf,
    pub console_bundle: PathBuf,
    pub console_dir: PathBuf,
    pub renewal_log: PathBuf,
}

impl SyncPaths {
    pub fn from_config(section: &PathsSection) -> Self {
        let console_dir = section
            .console_bundle
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            store_root: section.store_root.clone(),
            live_root: section.live_root.clone(),
            console_bundle: section.console_bundle.clone(),
            console_dir,
            renewal_log: section.renewal_log.clone(),
        }
    }

    /// Certificate directory of `domain`, refusing names that escape `live_root`.
    pub fn certificate_dir(&self, domain: &str) -> Result<PathBuf> {
        let dir = self.live_root.join(domain);
        if !path::is_below(&dir, &self.live_root) {
            bail!(
                "domain '{}' does not name a directory below {}",
                domain,
                self.live_root.display()
            );
        }
        Ok(dir)
    }

    pub fn fullchain(&self, domain: &str) -> Result<PathBuf> {
        Ok(self.certificate_dir(domain)?.join(constants::FULLCHAIN_FILE))
    }

    pub fn privkey(&self, domain: &str) -> Result<PathBuf> {
        Ok(self.certificate_dir(domain)?.join(constants::PRIVKEY_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let paths = SyncPaths::from_config(&PathsSection::default());
        assert_eq!(paths.store_root, PathBuf::from("/etc/letsencrypt"));
        assert_eq!(paths.console_dir, PathBuf::from("/etc/cockpit/ws-certs.d"));
        assert_eq!(
            paths.fullchain("example.com").unwrap(),
            PathBuf::from("/etc/letsencrypt/live/example.com/fullchain.pem")
        );
        assert_eq!(
            paths.privkey("example.com").unwrap(),
            PathBuf::from("/etc/letsencrypt/live/example.com/privkey.pem")
        );
    }

    #[test]
    fn test_bare_bundle_name_uses_current_dir() {
        let section = PathsSection {
            console_bundle: PathBuf::from("bundle.cert"),
            ..Default::default()
        };
        assert_eq!(SyncPaths::from_config(&section).console_dir, PathBuf::from("."));
    }

    #[test]
    fn test_certificate_dir_rejects_traversal() {
        let paths = SyncPaths::from_config(&PathsSection::default());
        assert!(paths.certificate_dir("../../etc").is_err());
        assert!(paths.certificate_dir("..").is_err());
        assert!(paths.certificate_dir("/etc").is_err());
    }
}
