//! Debugger seam
//!
//! The gate only decides; what "pausing" means is up to a [`Debugger`].
//! Two implementations ship with the SDK:
//! - [`TerminalDebugger`]: blocks the calling thread on a small stdin prompt
//! - [`AttachDebugger`]: launches an external debugger against this process
//!   and waits for it to exit

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::panic::Location;
use std::process::Command;

use cipdb_core::{EnvKeys, EnvSource, Evaluation, ProcessEnv};

use crate::error::{Result, SdkError};

/// Where and why a breakpoint fired
#[derive(Debug, Clone)]
pub struct BreakSite {
    pub location: &'static Location<'static>,
    pub id: Option<String>,
    pub evaluation: Evaluation,
}

impl BreakSite {
    pub fn new(
        location: &'static Location<'static>,
        id: Option<String>,
        evaluation: Evaluation,
    ) -> Self {
        Self {
            location,
            id,
            evaluation,
        }
    }
}

impl fmt::Display for BreakSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.location.file(),
            self.location.line(),
            self.location.column()
        )?;
        if let Some(id) = &self.id {
            write!(f, " [id={}]", id)?;
        }
        write!(f, " (decided by {})", self.evaluation.decided_by)
    }
}

/// Receives control when a breakpoint triggers
pub trait Debugger: Send + Sync {
    /// Suspend at a breakpoint until the user resumes
    fn pause(&self, site: &BreakSite) -> Result<()>;

    /// Inspect a failure after the fact
    fn post_mortem(&self, site: &BreakSite, error: &(dyn Error + 'static)) -> Result<()>;
}

// =========================================================================
// Terminal debugger
// =========================================================================

/// How a prompt session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptExit {
    Continue,
    Quit,
}

/// Interactive pause on stdin/stderr
///
/// Commands: `c`/`continue`, `bt`/`where`, `env`, `site`, `h`/`help`, `q`/`quit`.
/// End of input resumes execution; `quit` exits the process with status 1.
#[derive(Debug, Clone, Default)]
pub struct TerminalDebugger {
    keys: EnvKeys,
}

impl TerminalDebugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables shown by the `env` command
    pub fn with_env_keys(mut self, keys: EnvKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Run the prompt against arbitrary streams
    pub fn run_prompt<R: BufRead, W: Write>(
        &self,
        site: &BreakSite,
        env: &dyn EnvSource,
        input: &mut R,
        output: &mut W,
    ) -> Result<PromptExit> {
        writeln!(output, "cipdb: paused at {}", site)?;
        let mut line = String::new();

        loop {
            write!(output, "(cipdb) ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(PromptExit::Continue);
            }

            match line.trim() {
                "" => {}
                "c" | "cont" | "continue" => return Ok(PromptExit::Continue),
                "q" | "quit" | "exit" => return Ok(PromptExit::Quit),
                "bt" | "where" | "w" => writeln!(output, "{}", Backtrace::force_capture())?,
                "site" | "l" => writeln!(output, "{}", site)?,
                "env" => {
                    for name in [&self.keys.disable_var, &self.keys.id_var, &self.keys.ids_var] {
                        let value = env.var(name).unwrap_or_else(|| "<not set>".to_string());
                        writeln!(output, "  {}: {}", name, value)?;
                    }
                }
                "h" | "help" | "?" => writeln!(
                    output,
                    "commands: c(ontinue), bt, env, site, q(uit), h(elp)"
                )?,
                other => writeln!(output, "unknown command: {}", other)?,
            }
        }
    }

    fn interact(&self, site: &BreakSite) -> Result<()> {
        let stdin = io::stdin();
        let stderr = io::stderr();
        let exit = self.run_prompt(site, &ProcessEnv, &mut stdin.lock(), &mut stderr.lock())?;

        if exit == PromptExit::Quit {
            tracing::info!("Debugger quit at {}", site);
            std::process::exit(1);
        }
        Ok(())
    }
}

impl Debugger for TerminalDebugger {
    fn pause(&self, site: &BreakSite) -> Result<()> {
        self.interact(site)
    }

    fn post_mortem(&self, site: &BreakSite, error: &(dyn Error + 'static)) -> Result<()> {
        {
            let mut stderr = io::stderr().lock();
            write_error_chain(&mut stderr, error)?;
        }
        self.interact(site)
    }
}

/// Write an error followed by its `source()` chain
pub fn write_error_chain<W: Write>(output: &mut W, error: &(dyn Error + 'static)) -> io::Result<()> {
    writeln!(output, "cipdb: post-mortem: {}", error)?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(output, "  caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

// =========================================================================
// External debugger
// =========================================================================

/// Launches an external debugger attached to the current process.
///
/// `{pid}` in the arguments is replaced with this process id. The calling
/// thread blocks until the debugger exits.
#[derive(Debug, Clone)]
pub struct AttachDebugger {
    program: String,
    args: Vec<String>,
}

impl AttachDebugger {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `rust-gdb -p {pid}`
    pub fn gdb() -> Self {
        Self::new("rust-gdb", vec!["-p".to_string(), "{pid}".to_string()])
    }

    /// `rust-lldb -p {pid}`
    pub fn lldb() -> Self {
        Self::new("rust-lldb", vec!["-p".to_string(), "{pid}".to_string()])
    }

    /// Arguments with `{pid}` substituted
    pub fn resolved_args(&self, pid: u32) -> Vec<String> {
        let pid = pid.to_string();
        self.args.iter().map(|arg| arg.replace("{pid}", &pid)).collect()
    }

    fn launch(&self, site: &BreakSite) -> Result<()> {
        let args = self.resolved_args(std::process::id());
        tracing::info!("Attaching {} {:?} at {}", self.program, args, site);

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| SdkError::Debugger(format!("failed to start {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(SdkError::Debugger(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

impl Debugger for AttachDebugger {
    fn pause(&self, site: &BreakSite) -> Result<()> {
        self.launch(site)
    }

    fn post_mortem(&self, site: &BreakSite, error: &(dyn Error + 'static)) -> Result<()> {
        {
            let mut stderr = io::stderr().lock();
            write_error_chain(&mut stderr, error)?;
        }
        self.launch(site)
    }
}
