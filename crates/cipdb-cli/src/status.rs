//! `--status` report

use std::io::{self, Write};

use cipdb_core::{EnvKeys, EnvSnapshot, EnvSource, IdMode};

/// Extra variable shown because env conditions commonly use it
const DEBUG_VAR: &str = "DEBUG";

/// Write the status report for the environment the program would see
pub fn write_status<W: Write>(
    output: &mut W,
    keys: &EnvKeys,
    env: &dyn EnvSource,
    globally_enabled: bool,
) -> io::Result<()> {
    let snapshot = EnvSnapshot::capture(env, keys);
    let mode = if !globally_enabled || snapshot.disabled() {
        "disabled"
    } else {
        match snapshot.id_mode() {
            IdMode::Development => "development (every breakpoint id triggers)",
            IdMode::Production => "production (only allow-listed ids trigger)",
        }
    };

    writeln!(output, "cipdb Status")?;
    writeln!(output, "{}", "=".repeat(40))?;
    writeln!(output, "Global enabled: {}", globally_enabled)?;
    writeln!(output, "Mode: {}", mode)?;

    let allow_list = snapshot.allow_list();
    if !allow_list.is_empty() {
        writeln!(output, "Allowed ids: {}", allow_list.join(", "))?;
    }

    writeln!(output)?;
    writeln!(output, "Environment Variables:")?;
    for name in [
        keys.disable_var.as_str(),
        keys.id_var.as_str(),
        keys.ids_var.as_str(),
        DEBUG_VAR,
    ] {
        let value = env.var(name).unwrap_or_else(|| "<not set>".to_string());
        writeln!(output, "  {}: {}", name, value)?;
    }

    writeln!(output)?;
    writeln!(output, "Usage Examples:")?;
    writeln!(output, "  cipdb ./target/debug/app")?;
    writeln!(output, "  cipdb --id validate ./target/debug/app")?;
    writeln!(output, "  cipdb --ids validate,save ./target/debug/app")?;
    writeln!(output, "  cipdb --env DEBUG=true ./target/debug/app")?;
    writeln!(output, "  {}=batch-2 cipdb ./target/debug/app", keys.id_var)?;
    Ok(())
}
