//! Optional journald forwarding via systemd-cat.
//!
//! Best-effort: failure to forward never changes the exit status.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

pub fn systemd_cat_available() -> bool {
    Command::new("systemd-cat")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Forward one JSON record to journald under `tag`.
pub fn forward_json(tag: &str, record: &Value) {
    if !systemd_cat_available() {
        debug!("systemd-cat not available; skipping journald forwarding");
        return;
    }

    let mut child = match Command::new("systemd-cat")
        .arg("-t")
        .arg(tag)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "spawn systemd-cat");
            return;
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        let _ = writeln!(stdin, "{}", record);
    }

    let _ = child.wait();
}
