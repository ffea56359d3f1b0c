//! Drives the renewal client and classifies its outcome.
//!
//! The client does not fold the deploy hook's exit status into its own, it
//! only logs it. A renewal therefore counts as successful only when the
//! client exited cleanly *and* its captured output carries no hook error.

use crate::constants;
use crate::core::paths::SyncPaths;
use crate::models::config::CertsyncConfig;
use crate::models::settings::RunSettings;
use crate::util::process::Invocation;
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::{error, info};

/// Longest chunk copied at once; longer lines are split across writes.
const MAX_LINE: u64 = 64 * 1024;

/// Process status and parsed log signal, kept apart until classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalOutcome {
    pub client_succeeded: bool,
    pub client_exit_code: Option<i32>,
    /// Log lines reporting a failed hook.
    pub hook_errors: Vec<String>,
}

impl RenewalOutcome {
    pub fn succeeded(&self) -> bool {
        self.client_succeeded && self.hook_errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": "renew",
            "client_succeeded": self.client_succeeded,
            "client_exit_code": self.client_exit_code,
            "hook_errors": self.hook_errors,
            "succeeded": self.succeeded(),
        })
    }
}

/// Canonical absolute path of the running binary.
pub fn current_executable() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    exe.canonicalize()
        .with_context(|| format!("canonicalize {}", exe.display()))
}

/// Shell command line the renewal client runs as its deploy hook.
pub fn hook_command(exe: &Path, settings: &RunSettings) -> String {
    let mut words = vec![shell_quote(&exe.display().to_string())];
    words.extend(settings.hook_args().iter().map(|a| shell_quote(a)));
    words.join(" ")
}

/// Quote `word` for `sh`, leaving plain words untouched.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Non-interactive renewal; the deploy hook runs once per lineage that was
/// actually renewed, never after a failed or skipped attempt.
pub fn client_invocation(certbot: &str, hook: &str, extra_args: &[String]) -> Invocation {
    Invocation::new(certbot)
        .args([
            "renew",
            "--non-interactive",
            "--agree-tos",
            "--text",
            "-v",
            "--deploy-hook",
        ])
        .arg(hook)
        .args(extra_args.iter().cloned())
}

/// Lines of `log` in which the client reports a failed hook.
pub fn scan_hook_errors(log: &str) -> Result<Vec<String>> {
    let marker = Regex::new(constants::HOOK_ERROR_PATTERN).context("compile hook error pattern")?;
    Ok(log
        .lines()
        .filter(|line| marker.is_match(line))
        .map(|line| line.trim().to_string())
        .collect())
}

/// Run the renewal client, capture its output, and classify the result.
pub fn renew(
    config: &CertsyncConfig,
    paths: &SyncPaths,
    settings: &RunSettings,
) -> Result<RenewalOutcome> {
    let exe = current_executable()?;
    let hook = hook_command(&exe, settings);
    let invocation = client_invocation(&config.tools.certbot, &hook, &config.renew.extra_args);
    info!(hook = %hook, log = %paths.renewal_log.display(), "starting renewal");

    if let Some(parent) = paths.renewal_log.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let log = File::create(&paths.renewal_log)
        .with_context(|| format!("open renewal log {}", paths.renewal_log.display()))?;

    let code = run_tee(&invocation, log)?;
    let captured = fs::read(&paths.renewal_log)
        .with_context(|| format!("read renewal log {}", paths.renewal_log.display()))?;
    let hook_errors = scan_hook_errors(&String::from_utf8_lossy(&captured))?;

    let outcome = RenewalOutcome {
        client_succeeded: code == Some(0),
        client_exit_code: code,
        hook_errors,
    };
    if !outcome.client_succeeded {
        error!(code = ?outcome.client_exit_code, "renewal client failed");
    }
    for line in &outcome.hook_errors {
        error!("post-renewal hook failed: {}", line);
    }
    Ok(outcome)
}

/// Run `invocation`, copying its stdout and stderr both to the console and to `log`.
fn run_tee(invocation: &Invocation, log: File) -> Result<Option<i32>> {
    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawn {}", invocation.program))?;

    let log = Arc::new(Mutex::new(log));
    let stdout = child.stdout.take().context("capture client stdout")?;
    let stderr = child.stderr.take().context("capture client stderr")?;
    let out = tee(stdout, Arc::clone(&log), Box::new(io::stdout()));
    let err = tee(stderr, Arc::clone(&log), Box::new(io::stderr()));

    let status = child
        .wait()
        .with_context(|| format!("wait for {}", invocation.program))?;
    for handle in [out, err] {
        handle
            .join()
            .map_err(|_| anyhow!("output capture thread panicked"))?
            .context("capture client output")?;
    }
    Ok(status.code())
}

fn tee<R>(
    reader: R,
    log: Arc<Mutex<File>>,
    mut console: Box<dyn Write + Send>,
) -> JoinHandle<io::Result<()>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            if (&mut reader).take(MAX_LINE).read_until(b'\n', &mut line)? == 0 {
                break;
            }
            // console output is best-effort; the log is what gets classified
            let _ = console.write_all(&line);
            let mut file = log
                .lock()
                .map_err(|_| io::Error::other("renewal log lock poisoned"))?;
            file.write_all(&line)?;
        }
        let _ = console.flush();
        Ok(())
    })
}
