//! Launcher settings

use std::path::Path;

use cipdb_sdk::GateConfig;
use serde::Deserialize;

/// Defaults applied before command line flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Variable names used by the launched program
    pub gate: GateConfig,

    /// Default allow-list when `--ids` is not given
    pub ids: Option<String>,

    /// Extra `KEY=VALUE` assignments applied before `--env` flags
    pub env: Vec<String>,
}

impl LauncherSettings {
    /// Load settings from `.env`, an optional `cipdb` settings file in the
    /// working directory (or `path` when given) and `CIPDB_CLI_*` variables.
    ///
    /// Nested keys use `__` (`CIPDB_CLI_GATE__ID_POLICY=gate`); `CIPDB_CLI_ENV`
    /// takes a comma-separated list of assignments.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("cipdb").required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CIPDB_CLI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("env")
                    .ignore_empty(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load launcher settings: {}", e))?;

        settings
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize launcher settings: {}", e))
    }
}
