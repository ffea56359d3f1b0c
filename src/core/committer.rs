//! Version-control audit trail for directories the renewal touches.

use crate::models::outcome::Step;
use crate::util::git::Git;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// Commit every outstanding change below `dir`.
///
/// A `git` that is not installed, a missing directory, or a directory that
/// is not a repository are soft preconditions: reported as skipped, nothing
/// is touched. A `git` that exists but cannot be spawned is a hard failure.
/// The reported change count adds the untracked files to a single 0/1 flag
/// for tracked modifications, so it is an approximation.
pub fn commit(git: &Git<'_>, dir: &Path) -> Result<Step> {
    if !git.available()? {
        info!(dir = %dir.display(), "{} not available, skipping commit", git.program());
        return Ok(Step::Skipped(format!("{} not available", git.program())));
    }
    if !dir.is_dir() {
        info!(dir = %dir.display(), "directory missing, skipping commit");
        return Ok(Step::Skipped(format!("{} does not exist", dir.display())));
    }
    if !dir.join(".git").exists() {
        info!(dir = %dir.display(), "not a git repository, skipping commit");
        return Ok(Step::Skipped(format!("{} is not a git repository", dir.display())));
    }

    let untracked = git.untracked_count(dir)?;
    let modified = usize::from(git.has_tracked_changes(dir)?);
    let changed = untracked + modified;
    debug!(dir = %dir.display(), untracked, modified, "change count");
    if changed == 0 {
        return Ok(Step::Skipped(format!("no changes in {}", dir.display())));
    }

    info!(dir = %dir.display(), changed, "committing changes");
    git.add_all(dir)?;
    git.commit(dir, &commit_message(dir))?;
    Ok(Step::Applied(format!(
        "committed {} changed file(s) in {}",
        changed,
        dir.display()
    )))
}

fn commit_message(dir: &Path) -> String {
    format!("certsync: automated commit of {}", dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::process::testing::ScriptedRunner;
    use crate::util::process::{Completed, Invocation, Runner};
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        dir
    }

    fn status(untracked: &'static str, tracked: &'static str) -> ScriptedRunner {
        ScriptedRunner::new(move |inv: &Invocation| {
            if inv.has_arg("ls-files") {
                Ok(Completed::exit(0).with_stdout(untracked))
            } else if inv.has_arg("status") {
                Ok(Completed::exit(0).with_stdout(tracked))
            } else {
                Ok(Completed::exit(0))
            }
        })
    }

    #[test]
    fn test_clean_repo_is_noop() {
        let dir = repo();
        let runner = status("", "");
        let step = commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        assert!(matches!(step, Step::Skipped(_)));
        assert_eq!(runner.count_with("add"), 0);
        assert_eq!(runner.count_with("commit"), 0);
    }

    #[test]
    fn test_untracked_files_commit_once() {
        let dir = repo();
        let runner = status("a.pem\0b.pem\0c.pem\0", "");
        let step = commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        assert_eq!(
            step,
            Step::Applied(format!("committed 3 changed file(s) in {}", dir.path().display()))
        );
        assert_eq!(runner.count_with("add"), 1);
        assert_eq!(runner.count_with("commit"), 1);
    }

    #[test]
    fn test_tracked_changes_count_as_one() {
        let dir = repo();
        let runner = status("", " M a.pem\n M b.pem\n D c.pem\n");
        let step = commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        assert!(matches!(step, Step::Applied(ref d) if d.starts_with("committed 1 ")));
        assert_eq!(runner.count_with("commit"), 1);
    }

    #[test]
    fn test_commit_message_names_directory() {
        let dir = repo();
        let runner = status("new.pem\0", "");
        commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        let calls = runner.calls();
        let commit_call = calls.iter().find(|c| c.has_arg("commit")).unwrap();
        assert_eq!(
            commit_call.args.last().unwrap(),
            &format!("certsync: automated commit of {}", dir.path().display())
        );
    }

    #[test]
    fn test_git_missing_is_soft() {
        let dir = repo();
        let runner = ScriptedRunner::new(|_| Err(io::Error::from(io::ErrorKind::NotFound)));
        let step = commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        assert!(matches!(step, Step::Skipped(_)));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_git_not_executable_is_hard() {
        let dir = repo();
        let runner = status("new.pem\0", "");
        let denied = ScriptedRunner::new(move |inv| {
            if inv.has_arg("--version") {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else {
                runner.run(inv)
            }
        });
        let err = commit(&Git::new(&denied, "git"), dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("git --version"));
        assert_eq!(denied.count_with("add"), 0);
        assert_eq!(denied.count_with("commit"), 0);
    }

    #[test]
    fn test_missing_directory_is_soft() {
        let dir = TempDir::new().unwrap();
        let runner = ScriptedRunner::succeeding();
        let step = commit(&Git::new(&runner, "git"), &dir.path().join("gone")).unwrap();
        assert!(matches!(step, Step::Skipped(_)));
        assert_eq!(runner.count_with("-C"), 0);
    }

    #[test]
    fn test_not_a_repository_is_soft() {
        let dir = TempDir::new().unwrap();
        let runner = ScriptedRunner::succeeding();
        let step = commit(&Git::new(&runner, "git"), dir.path()).unwrap();
        assert!(matches!(step, Step::Skipped(ref r) if r.contains("not a git repository")));
        assert_eq!(runner.count_with("-C"), 0);
    }

    #[test]
    fn test_commit_failure_is_hard() {
        let dir = repo();
        let runner = ScriptedRunner::new(|inv| {
            if inv.has_arg("ls-files") {
                Ok(Completed::exit(0).with_stdout("x\0"))
            } else if inv.has_arg("commit") {
                Ok(Completed::exit(128).with_stderr("fatal: unable to write"))
            } else {
                Ok(Completed::exit(0))
            }
        });
        let err = commit(&Git::new(&runner, "git"), dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("git commit"));
    }

    #[test]
    fn test_add_failure_skips_commit() {
        let dir = repo();
        let runner = ScriptedRunner::new(|inv| {
            if inv.has_arg("ls-files") {
                Ok(Completed::exit(0).with_stdout("x\0"))
            } else if inv.has_arg("add") {
                Ok(Completed::exit(1))
            } else {
                Ok(Completed::exit(0))
            }
        });
        assert!(commit(&Git::new(&runner, "git"), dir.path()).is_err());
        assert_eq!(runner.count_with("commit"), 0);
    }
}
