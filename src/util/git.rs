use crate::constants;
use crate::util::process::{run_checked, Invocation, Runner};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Thin wrapper around the `git` binary, always operating via `git -C <dir>`.
pub struct Git<'a> {
    runner: &'a dyn Runner,
    program: &'a str,
}

impl<'a> Git<'a> {
    pub fn new(runner: &'a dyn Runner, program: &'a str) -> Self {
        Self { runner, program }
    }

    pub fn program(&self) -> &str {
        self.program
    }

    /// Whether the binary is installed. Only a not-found spawn error means
    /// absent; any other spawn error is returned.
    pub fn available(&self) -> Result<bool> {
        let inv = Invocation::new(self.program).arg("--version");
        match self.runner.run(&inv) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("run {}", inv)),
        }
    }

    /// Untracked files not excluded by ignore rules.
    pub fn untracked_count(&self, dir: &Path) -> Result<usize> {
        let out = run_checked(
            self.runner,
            &self.in_dir(dir).args(["ls-files", "--others", "--exclude-standard", "-z"]),
        )
        .context("git ls-files")?;
        Ok(out.stdout.split(|b| *b == 0).filter(|s| !s.is_empty()).count())
    }

    /// Whether any tracked file is modified, added, removed, copied, or renamed.
    pub fn has_tracked_changes(&self, dir: &Path) -> Result<bool> {
        let out = run_checked(
            self.runner,
            &self.in_dir(dir).args(["status", "--porcelain", "--untracked-files=no"]),
        )
        .context("git status")?;
        Ok(out.stdout.iter().any(|b| !b.is_ascii_whitespace()))
    }

    pub fn add_all(&self, dir: &Path) -> Result<()> {
        run_checked(self.runner, &self.in_dir(dir).args(["add", "-A", "."])).context("git add")?;
        Ok(())
    }

    /// Commit staged changes under the fixed automation identity.
    pub fn commit(&self, dir: &Path, message: &str) -> Result<()> {
        let inv = Invocation::new(self.program)
            .arg("-C")
            .arg(dir.display().to_string())
            .arg("-c")
            .arg(format!("user.name={}", constants::COMMIT_AUTHOR_NAME))
            .arg("-c")
            .arg(format!("user.email={}", constants::COMMIT_AUTHOR_EMAIL))
            .args(["commit", "--quiet", "-m"])
            .arg(message);
        run_checked(self.runner, &inv).context("git commit")?;
        Ok(())
    }

    fn in_dir(&self, dir: &Path) -> Invocation {
        Invocation::new(self.program)
            .arg("-C")
            .arg(dir.display().to_string())
    }
}
