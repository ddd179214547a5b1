use anyhow::Result;
use clap::Parser;

use cipdb_cli::{run, Cli, LaunchError, LauncherSettings};

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("cipdb: {err}");
    }

    let cli = Cli::parse();
    let result = LauncherSettings::load(cli.config.as_deref())
        .and_then(|settings| run(&cli, &settings));

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            if let Some(LaunchError::ProgramNotFound(_)) = err.downcast_ref::<LaunchError>() {
                eprintln!("Error: {err}");
            } else {
                eprintln!("cipdb error: {err:#}");
            }
            1
        }
    };

    std::process::exit(code);
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cipdb_cli=warn,cipdb_sdk=warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
