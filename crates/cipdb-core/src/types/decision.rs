//! Decision outcomes produced by the gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final outcome of a breakpoint request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Hand control to the debugger
    Trigger,
    /// Return immediately
    Skip,
}

impl Decision {
    /// Map a boolean onto a decision
    pub fn from_bool(trigger: bool) -> Self {
        if trigger {
            Decision::Trigger
        } else {
            Decision::Skip
        }
    }

    pub fn is_trigger(self) -> bool {
        matches!(self, Decision::Trigger)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Trigger => write!(f, "trigger"),
            Decision::Skip => write!(f, "skip"),
        }
    }
}

/// Stage of the priority chain, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Process-wide enable/disable switch
    GlobalSwitch,
    /// `CIPDB` environment disable flag
    EnvOverride,
    /// Breakpoint id against the allow-list
    IdMatch,
    /// Caller-supplied condition
    Condition,
}

impl Tier {
    /// All tiers in the order they are evaluated
    pub const ORDER: [Tier; 4] = [
        Tier::GlobalSwitch,
        Tier::EnvOverride,
        Tier::IdMatch,
        Tier::Condition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::GlobalSwitch => "global_switch",
            Tier::EnvOverride => "env_override",
            Tier::IdMatch => "id_match",
            Tier::Condition => "condition",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single tier: either it decides, or it lets the next tier run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierVerdict {
    Abstain,
    Decide(Decision),
}

impl TierVerdict {
    pub const SKIP: TierVerdict = TierVerdict::Decide(Decision::Skip);
    pub const TRIGGER: TierVerdict = TierVerdict::Decide(Decision::Trigger);

    pub fn decision(self) -> Option<Decision> {
        match self {
            TierVerdict::Abstain => None,
            TierVerdict::Decide(decision) => Some(decision),
        }
    }
}

/// A decision together with the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub decision: Decision,
    pub decided_by: Tier,
}

impl Evaluation {
    pub fn new(decision: Decision, decided_by: Tier) -> Self {
        Self {
            decision,
            decided_by,
        }
    }

    pub fn triggered(&self) -> bool {
        self.decision.is_trigger()
    }
}
