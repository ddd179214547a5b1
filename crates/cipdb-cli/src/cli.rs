//! Command line arguments

use clap::Parser;

use cipdb_core::EnvAssignment;

const EXAMPLES: &str = "\
Examples:
  cipdb ./target/debug/app                     Run with all breakpoints enabled
  cipdb --id validate ./target/debug/app       Run with one breakpoint id
  cipdb --ids validate,save ./target/debug/app Run with several breakpoint ids
  cipdb --env DEBUG=true ./target/debug/app    Set an environment variable
  cipdb --status                               Show breakpoint settings";

#[derive(Debug, Parser)]
#[command(name = "cipdb")]
#[command(about = "Run programs with cipdb conditional breakpoints", version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Set CIPDB_ID to run one specific breakpoint
    #[arg(long = "id", value_name = "ID")]
    pub id: Option<String>,

    /// Set CIPDB_IDS to run several breakpoints (comma-separated)
    #[arg(long = "ids", value_name = "IDS")]
    pub ids: Option<String>,

    /// Set an environment variable (KEY=VALUE, or KEY for KEY=true)
    #[arg(long = "env", visible_alias = "environment", value_name = "KEY[=VALUE]")]
    pub env: Vec<EnvAssignment>,

    /// Disable every breakpoint in the launched program
    #[arg(long)]
    pub disable: bool,

    /// Clear an inherited disable flag (default)
    #[arg(long)]
    pub enable: bool,

    /// Show breakpoint settings and exit
    #[arg(long)]
    pub status: bool,

    /// Launcher settings file (TOML, YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<std::path::PathBuf>,

    /// Program to run, followed by its arguments
    #[arg(
        value_name = "PROGRAM",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "status"
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Program and its arguments, if a program was given
    pub fn program(&self) -> Option<(&str, &[String])> {
        self.command
            .split_first()
            .map(|(program, args)| (program.as_str(), args))
    }
}
