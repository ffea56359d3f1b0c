//! Effective-uid checks.

use tracing::warn;

/// Check if the current process is running as root (euid 0).
pub fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Warn when not root: store writes and service control will likely fail.
pub fn warn_unless_root(mode: &str) {
    if !is_root() {
        warn!(
            euid = nix::unistd::geteuid().as_raw(),
            "{} is not running as root; certificate store writes and service control may fail",
            mode
        );
    }
}
