//! Results of individual propagation steps.

use anyhow::Result;
use std::fmt;

/// What a component did when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The side effect happened.
    Applied(String),
    /// Nothing to do: missing optional configuration or tooling, or no changes.
    Skipped(String),
}

/// Tagged result of one hook stage.
#[derive(Debug)]
pub enum StageResult {
    Success(String),
    Skipped(String),
    Failed(anyhow::Error),
}

impl StageResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, StageResult::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageResult::Success(_) => "success",
            StageResult::Skipped(_) => "skipped",
            StageResult::Failed(_) => "failed",
        }
    }
}

impl From<Result<Step>> for StageResult {
    fn from(result: Result<Step>) -> Self {
        match result {
            Ok(Step::Applied(detail)) => StageResult::Success(detail),
            Ok(Step::Skipped(reason)) => StageResult::Skipped(reason),
            Err(e) => StageResult::Failed(e),
        }
    }
}

impl fmt::Display for StageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageResult::Success(detail) => write!(f, "{}", detail),
            StageResult::Skipped(reason) => write!(f, "skipped: {}", reason),
            StageResult::Failed(e) => write!(f, "{:#}", e),
        }
    }
}
