//! Centralized constants for exit codes, default paths, and identities.

/// Configuration file consulted when neither `-c` nor `CERTSYNC_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/certsync/certsync.toml";

/// Root of the renewal client's on-disk store (committed after every renewal).
pub const DEFAULT_STORE_ROOT: &str = "/etc/letsencrypt";

/// Directory holding one `<domain>/` subdirectory per certificate lineage.
pub const DEFAULT_LIVE_ROOT: &str = "/etc/letsencrypt/live";

/// Combined certificate file read by the admin console.
pub const DEFAULT_CONSOLE_BUNDLE: &str = "/etc/cockpit/ws-certs.d/certsync.cert";

/// Where the renewal client's combined output is captured.
pub const DEFAULT_RENEWAL_LOG: &str = "/var/log/certsync/renew.log";

/// Service unit of the admin console.
pub const DEFAULT_CONSOLE_SERVICE: &str = "cockpit";

/// Full-chain file name inside a certificate directory.
pub const FULLCHAIN_FILE: &str = "fullchain.pem";

/// Private key file name inside a certificate directory.
pub const PRIVKEY_FILE: &str = "privkey.pem";

/// Permission mode for the console bundle (it carries the private key).
pub const CONSOLE_BUNDLE_MODE: u32 = 0o600;

/// Author and committer identity used for audit-trail commits.
pub const COMMIT_AUTHOR_NAME: &str = "certsync";
pub const COMMIT_AUTHOR_EMAIL: &str = "certsync@localhost";

/// Tag used when forwarding to journald.
pub const JOURNALD_TAG: &str = "certsync";

/// Log line emitted by the renewal client when the deploy hook exits non-zero.
///
/// Older clients print `Hook command "..." returned error code N`, newer ones
/// `Hook 'deploy-hook' reported error code N`.
pub const HOOK_ERROR_PATTERN: &str = r"(?i)\bhook\b.*\b(returned|reported) error code\b";

/// Exit codes.
pub const EXIT_OK: u8 = 0;
pub const EXIT_RUNTIME_ERROR: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_RENEWAL_FAILED: u8 = 3;
pub const EXIT_STORE_COMMIT_FAILED: u8 = 4;
pub const EXIT_CONSOLE_FAILED: u8 = 5;
pub const EXIT_WEBSERVER_FAILED: u8 = 6;
