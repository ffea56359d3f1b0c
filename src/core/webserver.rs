use crate::models::outcome::Step;
use crate::util::systemd::Systemctl;
use anyhow::{bail, Result};
use tracing::info;

/// Reload the named web server so it picks up the renewed certificate.
///
/// Unlike the console, a web server that was named explicitly but is not
/// running is a misconfiguration and fails.
pub fn reload(systemctl: &Systemctl<'_>, unit: Option<&str>) -> Result<Step> {
    let Some(unit) = unit.filter(|u| !u.is_empty()) else {
        info!("no web server configured, skipping reload");
        return Ok(Step::Skipped("no web server configured".to_string()));
    };

    if !systemctl.is_active(unit)? {
        bail!("web server {} is not active", unit);
    }

    systemctl.reload(unit)?;
    info!(unit, "web server reloaded");
    Ok(Step::Applied(format!("reloaded {}", unit)))
}
