//! Renewal propagation logic.

pub mod committer;
pub mod config;
pub mod console;
pub mod hook;
pub mod paths;
pub mod renewal;
pub mod webserver;
