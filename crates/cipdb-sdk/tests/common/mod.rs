//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use cipdb_sdk::{BreakSite, Debugger, Result, SdkError};
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

/// What the recording debugger saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    Pause { id: Option<String>, line: u32 },
    PostMortem { id: Option<String>, message: String },
}

/// Debugger that records visits instead of prompting
#[derive(Clone, Default)]
pub struct RecordingDebugger {
    visits: Arc<Mutex<Vec<Visit>>>,
    fail_with: Option<String>,
}

impl RecordingDebugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A debugger whose every visit fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            visits: Arc::default(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn visits(&self) -> Vec<Visit> {
        self.visits.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.visits.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.visits.lock().unwrap().clear();
    }

    fn record(&self, visit: Visit) -> Result<()> {
        self.visits.lock().unwrap().push(visit);
        match &self.fail_with {
            Some(message) => Err(SdkError::Debugger(message.clone())),
            None => Ok(()),
        }
    }
}

impl Debugger for RecordingDebugger {
    fn pause(&self, site: &BreakSite) -> Result<()> {
        self.record(Visit::Pause {
            id: site.id.clone(),
            line: site.location.line(),
        })
    }

    fn post_mortem(&self, site: &BreakSite, error: &(dyn Error + 'static)) -> Result<()> {
        self.record(Visit::PostMortem {
            id: site.id.clone(),
            message: error.to_string(),
        })
    }
}

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialize tests that touch process-wide state
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove the gate variables from the process environment
pub fn clear_gate_env() {
    for key in ["CIPDB", "CIPDB_ID", "CIPDB_IDS", "CIPDB_TEST_DEBUG", "CIPDB_TEST_STAGE"] {
        std::env::remove_var(key);
    }
}
