//! Data structures shared across the hook and the driver.

pub mod config;
pub mod outcome;
pub mod settings;
