//! Running the target program

use std::io;
use std::process::{Command, ExitStatus};

use cipdb_core::ProcessEnv;
use thiserror::Error;

use crate::cli::Cli;
use crate::plan::EnvPlan;
use crate::settings::LauncherSettings;
use crate::status::write_status;

/// Launcher failures that map to an exit status
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("program '{0}' not found")]
    ProgramNotFound(String),

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Execute the command line and return the process exit code
pub fn run(cli: &Cli, settings: &LauncherSettings) -> anyhow::Result<i32> {
    let plan = EnvPlan::build(cli, settings)?;
    let keys = &settings.gate.env;

    if cli.status {
        let stdout = io::stdout();
        write_status(
            &mut stdout.lock(),
            keys,
            &plan.overlay(&ProcessEnv),
            cipdb_sdk::is_enabled(),
        )?;
        return Ok(0);
    }

    let Some((program, args)) = cli.program() else {
        anyhow::bail!("a program is required unless using --status");
    };

    if !plan.touches_gate(keys) {
        tracing::debug!("No breakpoint variables changed, the inherited environment applies");
    }
    tracing::info!(
        "Launching {} with {} assignment(s) and {} removal(s)",
        program,
        plan.assignments().len(),
        plan.removals().len()
    );

    let status = spawn(program, args, &plan)?;
    Ok(exit_code(status))
}

fn spawn(program: &str, args: &[String], plan: &EnvPlan) -> Result<ExitStatus, LaunchError> {
    let mut command = Command::new(program);
    command.args(args);
    plan.apply_to(&mut command);

    command.status().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LaunchError::ProgramNotFound(program.to_string())
        } else {
            LaunchError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    })
}

/// Exit code to propagate; signals map to 128 + signal number on unix
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
