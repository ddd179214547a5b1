//! Builder pattern for Breakpoints

use std::sync::Arc;

use cipdb_core::{EnvKeys, EnvSource, GlobalState, ProcessEnv};

use crate::breakpoints::{Breakpoints, SharedEnv};
use crate::config::{GateConfig, IdPolicy};
use crate::debugger::{Debugger, TerminalDebugger};
use crate::decision_engine::DecisionEngine;

/// Builder for Breakpoints
///
/// Unset parts default to the process-wide switch, the live process
/// environment and the terminal debugger.
///
/// # Example
///
/// ```rust,ignore
/// use cipdb_sdk::{Breakpoints, GlobalState, MapEnv};
///
/// let breakpoints = Breakpoints::builder()
///     .with_state(GlobalState::new())
///     .with_env(MapEnv::new().with("CIPDB_IDS", "validate"))
///     .with_debugger(MyDebugger::default())
///     .build();
///
/// breakpoints.set_trace(true, Some("validate"))?;
/// ```
#[derive(Default)]
pub struct BreakpointsBuilder {
    config: GateConfig,
    state: Option<GlobalState>,
    env: Option<SharedEnv>,
    debugger: Option<Arc<dyn Debugger>>,
}

impl BreakpointsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole gate configuration
    pub fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    /// Use different environment variable names
    pub fn with_env_keys(mut self, keys: EnvKeys) -> Self {
        self.config.env = keys;
        self
    }

    /// Set the id tier behavior
    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.config.id_policy = policy;
        self
    }

    /// Use a specific switch instead of the process-wide one
    pub fn with_state(mut self, state: GlobalState) -> Self {
        self.state = Some(state);
        self
    }

    /// Read variables from `env` instead of the process environment
    pub fn with_env(mut self, env: impl EnvSource + Send + Sync + 'static) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    /// Hand triggered breakpoints to `debugger`
    pub fn with_debugger(mut self, debugger: impl Debugger + 'static) -> Self {
        self.debugger = Some(Arc::new(debugger));
        self
    }

    /// Share an existing debugger
    pub fn with_shared_debugger(mut self, debugger: Arc<dyn Debugger>) -> Self {
        self.debugger = Some(debugger);
        self
    }

    /// Build the facade
    pub fn build(self) -> Breakpoints {
        let state = self
            .state
            .unwrap_or_else(|| GlobalState::global().clone());
        let debugger: Arc<dyn Debugger> = match self.debugger {
            Some(debugger) => debugger,
            None => Arc::new(TerminalDebugger::new().with_env_keys(self.config.env.clone())),
        };
        let env: SharedEnv = match self.env {
            Some(env) => env,
            None => Arc::new(ProcessEnv),
        };

        Breakpoints {
            engine: DecisionEngine::new(self.config, state),
            env,
            debugger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipdb_core::{CallRequest, Decision, MapEnv, Tier};

    #[test]
    fn test_builder_defaults_to_global_state() {
        let breakpoints = BreakpointsBuilder::new().build();
        assert_eq!(breakpoints.engine().config(), &GateConfig::default());

        // Same flag as the process-wide switch
        let global = GlobalState::global();
        assert_eq!(breakpoints.state().is_enabled(), global.is_enabled());
    }

    #[test]
    fn test_builder_with_private_state_and_env() {
        let breakpoints = BreakpointsBuilder::new()
            .with_state(GlobalState::new())
            .with_env(MapEnv::new().with("CIPDB_IDS", "validate"))
            .build();

        let evaluation = breakpoints.evaluate(&CallRequest::new().with_id("save"));
        assert_eq!(evaluation.decision, Decision::Skip);
        assert_eq!(evaluation.decided_by, Tier::IdMatch);

        breakpoints.disable();
        let evaluation = breakpoints.evaluate(&CallRequest::new());
        assert_eq!(evaluation.decided_by, Tier::GlobalSwitch);
    }

    #[test]
    fn test_builder_config_setters() {
        let breakpoints = BreakpointsBuilder::new()
            .with_state(GlobalState::new())
            .with_env_keys(EnvKeys::with_prefix("APP"))
            .with_id_policy(IdPolicy::Gate)
            .build();

        assert_eq!(breakpoints.engine().config().env.id_var, "APP_ID");
        assert_eq!(breakpoints.engine().config().id_policy, IdPolicy::Gate);
    }
}
