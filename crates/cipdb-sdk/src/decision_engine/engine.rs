//! Core DecisionEngine implementation

use super::tiers;
use crate::config::GateConfig;
use cipdb_core::{
    CallRequest, Decision, EnvSnapshot, EnvSource, Evaluation, GlobalState, Tier, TierVerdict,
};

/// Evaluates breakpoint requests against the switch, environment and condition
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: GateConfig,
    state: GlobalState,
}

impl DecisionEngine {
    /// Create an engine with the given configuration and switch
    pub fn new(config: GateConfig, state: GlobalState) -> Self {
        Self { config, state }
    }

    /// Create an engine on the process-wide switch
    pub fn global(config: GateConfig) -> Self {
        Self::new(config, GlobalState::global().clone())
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    /// Whether the request should pause into the debugger
    pub fn should_trigger(&self, request: &CallRequest, env: &dyn EnvSource) -> bool {
        self.evaluate(request, env).triggered()
    }

    /// Walk the tiers in order; the first tier that decides wins.
    ///
    /// The environment is captured once per call, never cached across calls.
    pub fn evaluate(&self, request: &CallRequest, env: &dyn EnvSource) -> Evaluation {
        let id = request.effective_id();
        let snapshot = EnvSnapshot::capture(env, &self.config.env);

        let decided = Tier::ORDER.into_iter().find_map(|tier| {
            let verdict = match tier {
                Tier::GlobalSwitch => tiers::global_switch(&self.state),
                Tier::EnvOverride => tiers::env_override(&snapshot),
                Tier::IdMatch => tiers::id_match(id, &snapshot, self.config.id_policy),
                Tier::Condition => TierVerdict::Decide(tiers::condition(&request.condition, env)),
            };
            verdict.decision().map(|decision| Evaluation::new(decision, tier))
        });

        // The condition tier always decides
        let evaluation = decided.unwrap_or(Evaluation::new(Decision::Skip, Tier::Condition));

        if evaluation.decided_by == Tier::Condition {
            tracing::debug!(
                "Breakpoint id={:?} decided by {} ({}): {}",
                id,
                evaluation.decided_by,
                request.condition.describe(),
                evaluation.decision
            );
        } else {
            tracing::debug!(
                "Breakpoint id={:?} decided by {}: {}",
                id,
                evaluation.decided_by,
                evaluation.decision
            );
        }
        evaluation
    }
}

/// Default configuration on a private, enabled switch
impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(GateConfig::default(), GlobalState::new())
    }
}
