//! Utility modules wrapping external programs and the filesystem.

pub mod fs;
pub mod git;
pub mod journald;
pub mod path;
pub mod privilege;
pub mod process;
pub mod systemd;
