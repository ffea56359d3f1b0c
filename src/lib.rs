//! Certificate renewal with post-renewal propagation.
//!
//! Drives `certbot renew` and, as its deploy hook, commits the certificate
//! store, installs the renewed certificate for the admin console, and
//! reloads the web server.
//!
//! ## Modules
//! - `cli` — Command-line surface and mode dispatch
//! - `core` — Hook orchestration, components, renewal driver
//! - `models` — Configuration, run settings, stage outcomes
//! - `util` — External programs and filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
