//! Process-wide enable/disable switch
//!
//! `GlobalState` is a cheap, cloneable handle over a shared flag. The engine
//! takes it as an explicit dependency so tests can use a private instance,
//! while the free `enable()`/`disable()` functions operate on
//! [`GlobalState::global`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<GlobalState> = OnceLock::new();

/// Shared debugging switch, enabled by default
#[derive(Debug, Clone)]
pub struct GlobalState {
    debugging_enabled: Arc<AtomicBool>,
}

impl GlobalState {
    /// Create an independent switch, enabled
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            debugging_enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// The process-wide switch used by the free functions
    pub fn global() -> &'static GlobalState {
        GLOBAL.get_or_init(GlobalState::new)
    }

    pub fn enable(&self) {
        self.set_enabled(true);
    }

    pub fn disable(&self) {
        self.set_enabled(false);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.debugging_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.debugging_enabled.load(Ordering::Relaxed)
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
