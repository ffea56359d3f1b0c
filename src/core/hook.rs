//! Post-renewal propagation: store commit, console install, web server reload.

use crate::constants;
use crate::core::paths::SyncPaths;
use crate::core::{committer, console, webserver};
use crate::models::outcome::{StageResult, Step};
use crate::models::settings::RunSettings;
use crate::util::git::Git;
use crate::util::systemd::Systemctl;
use anyhow::Result;
use std::fmt;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StoreCommit,
    ConsoleInstall,
    ConsoleCommit,
    WebServerReload,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::StoreCommit => "store-commit",
            Stage::ConsoleInstall => "console-install",
            Stage::ConsoleCommit => "console-commit",
            Stage::WebServerReload => "webserver-reload",
        }
    }

    /// Exit code of the hook when this stage fails.
    pub fn failure_code(&self) -> u8 {
        match self {
            Stage::StoreCommit => constants::EXIT_STORE_COMMIT_FAILED,
            Stage::ConsoleInstall | Stage::ConsoleCommit => constants::EXIT_CONSOLE_FAILED,
            Stage::WebServerReload => constants::EXIT_WEBSERVER_FAILED,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Continue,
    Halt(u8),
}

/// What the hook does after `stage` produced `result`.
///
/// Skips count as success everywhere; which outcomes are skips rather than
/// failures is decided by the components themselves.
pub fn disposition(stage: Stage, result: &StageResult) -> Disposition {
    match result {
        StageResult::Success(_) | StageResult::Skipped(_) => Disposition::Continue,
        StageResult::Failed(_) => Disposition::Halt(stage.failure_code()),
    }
}

/// Every stage that ran, in order, and the resulting exit code.
#[derive(Debug)]
pub struct HookReport {
    pub stages: Vec<(Stage, StageResult)>,
    pub exit_code: u8,
}

impl HookReport {
    #[cfg(test)]
    pub fn ran(&self, stage: Stage) -> bool {
        self.stages.iter().any(|(s, _)| *s == stage)
    }

    #[cfg(test)]
    pub fn result(&self, stage: Stage) -> Option<&StageResult> {
        self.stages.iter().find(|(s, _)| *s == stage).map(|(_, r)| r)
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == constants::EXIT_OK
    }

    pub fn to_json(&self) -> serde_json::Value {
        let stages: Vec<_> = self
            .stages
            .iter()
            .map(|(stage, result)| {
                serde_json::json!({
                    "stage": stage.name(),
                    "result": result.label(),
                    "detail": result.to_string(),
                })
            })
            .collect();
        serde_json::json!({
            "mode": "hook",
            "exit_code": self.exit_code,
            "stages": stages,
        })
    }
}

/// The collaborators and layout the hook operates on.
pub struct Hook<'a> {
    pub git: Git<'a>,
    pub systemctl: Systemctl<'a>,
    pub paths: &'a SyncPaths,
    pub console_service: &'a str,
}

impl Hook<'_> {
    pub fn run(&self, settings: &RunSettings) -> HookReport {
        let plan: [(Stage, &dyn Fn() -> Result<Step>); 4] = [
            (Stage::StoreCommit, &|| {
                committer::commit(&self.git, &self.paths.store_root)
            }),
            (Stage::ConsoleInstall, &|| {
                console::install(
                    &self.systemctl,
                    self.paths,
                    self.console_service,
                    settings.console_domain(),
                )
            }),
            (Stage::ConsoleCommit, &|| {
                committer::commit(&self.git, &self.paths.console_dir)
            }),
            (Stage::WebServerReload, &|| {
                webserver::reload(&self.systemctl, settings.webserver_unit())
            }),
        ];

        let mut report = HookReport {
            stages: Vec::with_capacity(plan.len()),
            exit_code: constants::EXIT_OK,
        };
        for (stage, action) in plan {
            let result = StageResult::from(action());
            match &result {
                StageResult::Failed(e) => error!(%stage, "{:#}", e),
                other => info!(%stage, result = other.label(), "{}", other),
            }
            let next = disposition(stage, &result);
            report.stages.push((stage, result));
            if let Disposition::Halt(code) = next {
                report.exit_code = code;
                break;
            }
        }
        report
    }
}
