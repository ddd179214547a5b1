//! Breakpoints - the set_trace / post_mortem facade
//!
//! Bundles a [`DecisionEngine`], an environment source and a [`Debugger`].
//! Each call evaluates the tiers and, on trigger, hands control to the
//! debugger. Debugger failures are returned unchanged.

use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use cipdb_core::{CallRequest, Condition, Decision, EnvSource, Evaluation, GlobalState};

use crate::builder::BreakpointsBuilder;
use crate::debugger::{BreakSite, Debugger};
use crate::decision_engine::DecisionEngine;
use crate::error::Result;

/// Environment source shareable across threads
pub type SharedEnv = Arc<dyn EnvSource + Send + Sync>;

/// Conditional breakpoints bound to a debugger
pub struct Breakpoints {
    pub(crate) engine: DecisionEngine,
    pub(crate) env: SharedEnv,
    pub(crate) debugger: Arc<dyn Debugger>,
}

impl Breakpoints {
    /// Start building a facade
    pub fn builder() -> BreakpointsBuilder {
        BreakpointsBuilder::new()
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    pub fn state(&self) -> &GlobalState {
        self.engine.state()
    }

    pub fn enable(&self) {
        self.engine.state().enable();
    }

    pub fn disable(&self) {
        self.engine.state().disable();
    }

    /// Evaluate a request without touching the debugger
    pub fn evaluate(&self, request: &CallRequest) -> Evaluation {
        self.engine.evaluate(request, self.env.as_ref())
    }

    /// Conditional breakpoint.
    ///
    /// Pauses in the debugger when the gate triggers, returns immediately otherwise.
    #[track_caller]
    pub fn set_trace(&self, condition: impl Into<Condition>, id: Option<&str>) -> Result<Decision> {
        let location = Location::caller();
        let request = build_request(condition.into(), id);
        let Some(site) = self.gate(&request, location) else {
            return Ok(Decision::Skip);
        };

        self.debugger.pause(&site)?;
        Ok(Decision::Trigger)
    }

    /// Conditional post-mortem inspection of `error`
    #[track_caller]
    pub fn post_mortem(
        &self,
        error: &(dyn Error + 'static),
        condition: impl Into<Condition>,
        id: Option<&str>,
    ) -> Result<Decision> {
        let location = Location::caller();
        let request = build_request(condition.into(), id);
        let Some(site) = self.gate(&request, location) else {
            return Ok(Decision::Skip);
        };

        self.debugger.post_mortem(&site, error)?;
        Ok(Decision::Trigger)
    }

    fn gate(
        &self,
        request: &CallRequest,
        location: &'static Location<'static>,
    ) -> Option<BreakSite> {
        let evaluation = self.evaluate(request);
        if !evaluation.triggered() {
            return None;
        }

        tracing::info!(
            "Breakpoint triggered at {}:{} (id={:?}, decided by {})",
            location.file(),
            location.line(),
            request.effective_id(),
            evaluation.decided_by
        );
        Some(BreakSite::new(location, request.id.clone(), evaluation))
    }
}

impl std::fmt::Debug for Breakpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Breakpoints")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

fn build_request(condition: Condition, id: Option<&str>) -> CallRequest {
    let request = CallRequest::new().with_condition(condition);
    match id {
        Some(id) => request.with_id(id),
        None => request,
    }
}
