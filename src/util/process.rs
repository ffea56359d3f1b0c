//! Execution seam for the external programs the hook drives.
//!
//! Every collaborator call (git, systemctl) goes through a [`Runner`] so the
//! hook's decisions can be exercised without touching the host.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::io;
use std::process::Command;

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether `arg` appears anywhere in the argument list.
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completed {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Completed {
    pub fn exit(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    #[cfg(test)]
    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external programs to completion.
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> io::Result<Completed>;
}

/// Runs programs on the host via `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Completed> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()?;
        Ok(Completed {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Run an invocation and bail unless it exits successfully.
pub fn run_checked(runner: &dyn Runner, invocation: &Invocation) -> Result<Completed> {
    let output = runner
        .run(invocation)
        .with_context(|| format!("run {}", invocation))?;
    if output.success() {
        return Ok(output);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let status = match output.code {
        Some(code) => format!("exit code {}", code),
        None => "killed by signal".to_string(),
    };
    bail!(
        "command failed ({}): {}{}",
        status,
        stdout.trim_end(),
        stderr.trim_end()
    );
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRunner;
    use super::*;

    #[test]
    fn test_display_joins_program_and_args() {
        let inv = Invocation::new("systemctl").args(["is-active", "--quiet", "nginx"]);
        assert_eq!(inv.to_string(), "systemctl is-active --quiet nginx");
    }

    #[test]
    fn test_run_checked_ok() {
        let runner = ScriptedRunner::new(|_| Ok(Completed::exit(0).with_stdout("ok\n")));
        let out = run_checked(&runner, &Invocation::new("true")).unwrap();
        assert_eq!(out.stdout, b"ok\n");
    }

    #[test]
    fn test_run_checked_reports_output_on_failure() {
        let runner = ScriptedRunner::new(|_| Ok(Completed::exit(1).with_stderr("boom\n")));
        let err = run_checked(&runner, &Invocation::new("false")).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_run_checked_spawn_error() {
        let runner = ScriptedRunner::new(|_| Err(io::Error::from(io::ErrorKind::NotFound)));
        let err = run_checked(&runner, &Invocation::new("missing").arg("x")).unwrap_err();
        assert!(format!("{:#}", err).contains("run missing x"));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemRunner
            .run(&Invocation::new("certsync-definitely-not-a-program"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
