//! cipdb launcher
//!
//! Runs a program with the breakpoint environment prepared: allow-listed ids,
//! the disable flag and arbitrary extra variables.

pub mod cli;
pub mod launch;
pub mod plan;
pub mod settings;
pub mod status;

pub use cli::Cli;
pub use launch::{run, LaunchError};
pub use plan::{EnvPlan, PlannedEnv};
pub use settings::LauncherSettings;
