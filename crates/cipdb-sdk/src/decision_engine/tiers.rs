//! The four tiers of the priority chain
//!
//! Each tier either decides or abstains. Only the condition tier always decides.

use super::condition_evaluator::ConditionEvaluator;
use crate::config::IdPolicy;
use cipdb_core::{Condition, Decision, EnvSnapshot, EnvSource, GlobalState, TierVerdict};

/// Tier 1: a disabled switch skips everything below it
pub(super) fn global_switch(state: &GlobalState) -> TierVerdict {
    if state.is_enabled() {
        TierVerdict::Abstain
    } else {
        TierVerdict::SKIP
    }
}

/// Tier 2: the disable variable holding a falsy word skips.
/// Empty or unrecognized values abstain.
pub(super) fn env_override(snapshot: &EnvSnapshot) -> TierVerdict {
    if snapshot.disabled() {
        TierVerdict::SKIP
    } else {
        TierVerdict::Abstain
    }
}

/// Tier 3: match the breakpoint id against the merged allow-list.
///
/// An empty allow-list means development mode, where every id is allowed.
pub(super) fn id_match(id: Option<&str>, snapshot: &EnvSnapshot, policy: IdPolicy) -> TierVerdict {
    let Some(id) = id else {
        return TierVerdict::Abstain;
    };

    let allow_list = snapshot.allow_list();
    let allowed = allow_list.is_empty() || allow_list.iter().any(|allowed| allowed == id);

    match (allowed, policy) {
        (false, _) => TierVerdict::SKIP,
        (true, IdPolicy::Decisive) => TierVerdict::TRIGGER,
        (true, IdPolicy::Gate) => TierVerdict::Abstain,
    }
}

/// Tier 4: truthiness of the caller condition
pub(super) fn condition(condition: &Condition, env: &dyn EnvSource) -> Decision {
    Decision::from_bool(ConditionEvaluator::evaluate(condition, env))
}
