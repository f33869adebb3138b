//! CLI command handlers.
//!
//! Each handler implements the logic for one subcommand and is invoked by
//! main.rs. Handlers return an exit code so they can be tested without
//! touching the process.

mod config;
mod demo;
mod share;

pub use config::{run_config, ConfigOutput};
pub use demo::{run_demo, DemoOverrides};
pub use share::{run_actions, run_share_url, share_url_for};
