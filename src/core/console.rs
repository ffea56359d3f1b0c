//! Installs the renewed certificate for the admin console.

use crate::constants;
use crate::core::paths::SyncPaths;
use crate::models::outcome::Step;
use crate::util::fs as sync_fs;
use crate::util::systemd::Systemctl;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Build the console bundle for `domain` and restart the console if it runs.
///
/// No domain is a skip. Both certificate files are read before anything is
/// written, so a missing file leaves the old bundle untouched. An inactive
/// console service is not an error: the console may be unused on this host.
pub fn install(
    systemctl: &Systemctl<'_>,
    paths: &SyncPaths,
    service: &str,
    domain: Option<&str>,
) -> Result<Step> {
    let Some(domain) = domain.filter(|d| !d.is_empty()) else {
        info!("no console domain configured, skipping console certificate");
        return Ok(Step::Skipped("no console domain configured".to_string()));
    };

    let fullchain = sync_fs::read_required(&paths.fullchain(domain)?)
        .with_context(|| format!("full chain for {}", domain))?;
    let privkey = sync_fs::read_required(&paths.privkey(domain)?)
        .with_context(|| format!("private key for {}", domain))?;

    sync_fs::write_atomic(
        &paths.console_bundle,
        &[&fullchain, &privkey],
        constants::CONSOLE_BUNDLE_MODE,
    )
    .context("write console bundle")?;
    info!(
        domain,
        bundle = %paths.console_bundle.display(),
        "console certificate installed"
    );

    if !systemctl.is_active(service)? {
        warn!(service, "console service not active, not restarting");
        return Ok(Step::Applied(format!(
            "installed certificate for {} ({} not active)",
            domain, service
        )));
    }

    systemctl.restart(service)?;
    info!(service, "console service restarted");
    Ok(Step::Applied(format!(
        "installed certificate for {} and restarted {}",
        domain, service
    )))
}
