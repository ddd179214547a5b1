//! Configuration types for the breakpoint gate

use cipdb_core::EnvKeys;
use serde::{Deserialize, Serialize};

/// How the id tier treats an identified breakpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// The id tier decides whenever an id is given: trigger if allow-listed
    /// (or no allow-list is set), skip otherwise. The condition is not consulted.
    #[default]
    Decisive,

    /// The id tier only vetoes ids missing from the allow-list; allowed ids
    /// fall through so the condition still has to hold.
    Gate,
}

/// Gate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Environment variable names
    pub env: EnvKeys,

    /// Id tier behavior
    pub id_policy: IdPolicy,
}

impl GateConfig {
    /// Create a configuration reading `CIPDB`, `CIPDB_ID` and `CIPDB_IDS`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different environment variable names
    pub fn with_env_keys(mut self, env: EnvKeys) -> Self {
        self.env = env;
        self
    }

    /// Set the id tier behavior
    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
