//! Process-wide breakpoint API
//!
//! The free functions use one shared [`Breakpoints`] instance built on
//! [`GlobalState::global`], the live process environment and the terminal
//! debugger, unless a different instance was [`install`]ed first. The
//! switch functions act on whichever switch that instance was built with.

use std::error::Error;
use std::sync::OnceLock;

use cipdb_core::{Condition, Decision};

use crate::breakpoints::Breakpoints;
use crate::error::Result;

static BREAKPOINTS: OnceLock<Breakpoints> = OnceLock::new();

fn breakpoints() -> &'static Breakpoints {
    BREAKPOINTS.get_or_init(|| Breakpoints::builder().build())
}

/// Install the process-wide facade. Only the first call (or the first use of
/// the free functions) wins; returns whether `breakpoints` was installed.
pub fn install(breakpoints: Breakpoints) -> bool {
    BREAKPOINTS.set(breakpoints).is_ok()
}

/// Globally enable breakpoints
pub fn enable() {
    breakpoints().enable();
}

/// Globally disable breakpoints; nothing below the switch can re-enable them
pub fn disable() {
    breakpoints().disable();
}

pub fn is_enabled() -> bool {
    breakpoints().state().is_enabled()
}

/// Conditional breakpoint on the process-wide facade
///
/// ```rust,ignore
/// cipdb_sdk::set_trace(true, None)?;                // always
/// cipdb_sdk::set_trace(false, Some("save"))?;       // id decides, condition unused
/// cipdb_sdk::set_trace("DEBUG", None)?;             // when DEBUG is truthy
/// ```
#[track_caller]
pub fn set_trace(condition: impl Into<Condition>, id: Option<&str>) -> Result<Decision> {
    breakpoints().set_trace(condition, id)
}

/// Conditional post-mortem on the process-wide facade
#[track_caller]
pub fn post_mortem(
    error: &(dyn Error + 'static),
    condition: impl Into<Condition>,
    id: Option<&str>,
) -> Result<Decision> {
    breakpoints().post_mortem(error, condition, id)
}
