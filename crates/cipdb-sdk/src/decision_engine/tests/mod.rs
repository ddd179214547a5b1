//! Unit tests for DecisionEngine

use super::*;
use crate::config::{GateConfig, IdPolicy};
use cipdb_core::{CallRequest, Condition, Decision, GlobalState, MapEnv, Tier};

fn engine() -> DecisionEngine {
    DecisionEngine::new(GateConfig::new(), GlobalState::new())
}

fn decide(engine: &DecisionEngine, request: &CallRequest, env: &MapEnv) -> (Decision, Tier) {
    let evaluation = engine.evaluate(request, env);
    (evaluation.decision, evaluation.decided_by)
}

// ============================================================================
// Tier 1: Global switch
// ============================================================================

#[test]
fn test_disable_skips_every_request() {
    let engine = engine();
    engine.state().disable();

    let env = MapEnv::new().with("CIPDB_IDS", "save");
    let requests = [
        CallRequest::new(),
        CallRequest::new().with_condition(true),
        CallRequest::new().with_id("save"),
        CallRequest::new().with_id("other"),
        CallRequest::new().with_condition(Condition::predicate(|| true)),
    ];

    for request in &requests {
        assert_eq!(decide(&engine, request, &env), (Decision::Skip, Tier::GlobalSwitch));
    }
}

#[test]
fn test_global_switch_beats_truthy_disable_var() {
    let engine = engine();
    engine.state().disable();

    let env = MapEnv::new().with("CIPDB", "true");
    assert!(!engine.should_trigger(&CallRequest::new(), &env));
}

#[test]
fn test_reenable_restores_triggering() {
    let engine = engine();
    engine.state().disable();
    assert!(!engine.should_trigger(&CallRequest::new(), &MapEnv::new()));

    engine.state().enable();
    assert!(engine.should_trigger(&CallRequest::new(), &MapEnv::new()));
}

// ============================================================================
// Tier 2: Environment disable flag
// ============================================================================

#[test]
fn test_env_disable_skips_regardless_of_id_and_condition() {
    let engine = engine();

    for word in ["false", "0", "no", "off", "False"] {
        let env = MapEnv::new().with("CIPDB", word).with("CIPDB_IDS", "save");
        assert_eq!(
            decide(&engine, &CallRequest::new(), &env),
            (Decision::Skip, Tier::EnvOverride)
        );
        assert_eq!(
            decide(&engine, &CallRequest::new().with_id("save"), &env),
            (Decision::Skip, Tier::EnvOverride)
        );
    }
}

#[test]
fn test_empty_or_unknown_disable_value_falls_through() {
    let engine = engine();

    for value in ["", "   ", "true", "1", "maybe"] {
        let env = MapEnv::new().with("CIPDB", value);
        assert_eq!(
            decide(&engine, &CallRequest::new(), &env),
            (Decision::Trigger, Tier::Condition),
            "CIPDB={value:?}"
        );
    }
}

// ============================================================================
// Tier 3: Id matching
// ============================================================================

#[test]
fn test_id_in_allow_list_triggers() {
    let env = MapEnv::new().with("CIPDB_IDS", "validate,save");
    let request = CallRequest::new().with_id("save");

    assert_eq!(decide(&engine(), &request, &env), (Decision::Trigger, Tier::IdMatch));
}

#[test]
fn test_id_missing_from_allow_list_skips() {
    let env = MapEnv::new().with("CIPDB_IDS", "validate");
    let request = CallRequest::new().with_id("save");

    assert_eq!(decide(&engine(), &request, &env), (Decision::Skip, Tier::IdMatch));
}

#[test]
fn test_single_id_variable_is_an_allow_list() {
    let env = MapEnv::new().with("CIPDB_ID", "save");

    assert!(engine().should_trigger(&CallRequest::new().with_id("save"), &env));
    assert!(!engine().should_trigger(&CallRequest::new().with_id("validate"), &env));
}

#[test]
fn test_both_allow_list_variables_are_merged() {
    let env = MapEnv::new()
        .with("CIPDB_ID", "load")
        .with("CIPDB_IDS", "validate, save");

    for id in ["load", "validate", "save"] {
        assert!(engine().should_trigger(&CallRequest::new().with_id(id), &env), "{id}");
    }
    assert!(!engine().should_trigger(&CallRequest::new().with_id("render"), &env));
}

#[test]
fn test_development_mode_triggers_any_id() {
    let env = MapEnv::new();
    let request = CallRequest::new().with_id("save");

    assert_eq!(decide(&engine(), &request, &env), (Decision::Trigger, Tier::IdMatch));
}

#[test]
fn test_development_mode_id_ignores_condition() {
    let env = MapEnv::new();
    let request = CallRequest::new().with_id("save").with_condition(false);

    assert_eq!(decide(&engine(), &request, &env), (Decision::Trigger, Tier::IdMatch));
}

#[test]
fn test_empty_ids_variable_is_development_mode() {
    let env = MapEnv::new().with("CIPDB_IDS", "").with("CIPDB_ID", "");
    let request = CallRequest::new().with_id("save");

    assert_eq!(decide(&engine(), &request, &env), (Decision::Trigger, Tier::IdMatch));
}

#[test]
fn test_empty_id_is_treated_as_no_id() {
    let env = MapEnv::new().with("CIPDB_IDS", "validate");
    let request = CallRequest::new().with_id("").with_condition(false);

    assert_eq!(decide(&engine(), &request, &env), (Decision::Skip, Tier::Condition));
}

#[test]
fn test_gate_policy_requires_condition_too() {
    let engine = DecisionEngine::new(
        GateConfig::new().with_id_policy(IdPolicy::Gate),
        GlobalState::new(),
    );
    let env = MapEnv::new().with("CIPDB_IDS", "validate");

    let allowed_false = CallRequest::new().with_id("validate").with_condition(false);
    assert_eq!(decide(&engine, &allowed_false, &env), (Decision::Skip, Tier::Condition));

    let allowed_true = CallRequest::new().with_id("validate").with_condition(true);
    assert_eq!(decide(&engine, &allowed_true, &env), (Decision::Trigger, Tier::Condition));

    let denied = CallRequest::new().with_id("save").with_condition(true);
    assert_eq!(decide(&engine, &denied, &env), (Decision::Skip, Tier::IdMatch));
}

// ============================================================================
// Tier 4: Condition
// ============================================================================

#[test]
fn test_condition_without_id() {
    let env = MapEnv::new();

    assert_eq!(
        decide(&engine(), &CallRequest::new().with_condition(false), &env),
        (Decision::Skip, Tier::Condition)
    );
    assert_eq!(
        decide(&engine(), &CallRequest::new().with_condition(true), &env),
        (Decision::Trigger, Tier::Condition)
    );
    assert_eq!(
        decide(&engine(), &CallRequest::new(), &env),
        (Decision::Trigger, Tier::Condition)
    );
}

#[test]
fn test_allow_list_does_not_affect_requests_without_id() {
    let env = MapEnv::new().with("CIPDB_ID", "other");

    assert!(engine().should_trigger(&CallRequest::new(), &env));
    assert!(!engine().should_trigger(&CallRequest::new().with_condition(false), &env));
}

#[test]
fn test_env_conditions_read_the_same_source() {
    let env = MapEnv::new().with("DEBUG", "yes").with("STAGE", "qa");

    assert!(engine().should_trigger(&CallRequest::new().with_condition("DEBUG"), &env));
    assert!(engine().should_trigger(&CallRequest::new().with_condition("STAGE=qa"), &env));
    assert!(!engine().should_trigger(&CallRequest::new().with_condition("STAGE=prod"), &env));
}

#[test]
fn test_panicking_predicate_skips() {
    let request = CallRequest::new().with_condition(Condition::predicate(|| panic!("bad state")));
    assert_eq!(
        decide(&engine(), &request, &MapEnv::new()),
        (Decision::Skip, Tier::Condition)
    );
}

#[test]
fn test_custom_env_keys() {
    let engine = DecisionEngine::new(
        GateConfig::new().with_env_keys(cipdb_core::EnvKeys::with_prefix("APP_BREAK")),
        GlobalState::new(),
    );

    // Default names are ignored once custom keys are configured
    let env = MapEnv::new().with("CIPDB", "false").with("APP_BREAK_IDS", "save");
    assert!(engine.should_trigger(&CallRequest::new().with_id("save"), &env));
    assert!(!engine.should_trigger(&CallRequest::new().with_id("load"), &env));

    let env = MapEnv::new().with("APP_BREAK", "off");
    assert!(!engine.should_trigger(&CallRequest::new(), &env));
}

#[test]
fn test_every_combination_yields_a_decision() {
    let engine = engine();
    let disable_values = [None, Some(""), Some("false"), Some("true"), Some("garbage")];
    let id_values = [None, Some(""), Some("save"), Some("validate,save")];
    let ids = [None, Some(""), Some("save"), Some("other")];
    let conditions = [true, false];

    for enabled in [true, false] {
        engine.state().set_enabled(enabled);
        for disable in disable_values {
            for list in id_values {
                for id in ids {
                    for condition in conditions {
                        let mut env = MapEnv::new();
                        if let Some(value) = disable {
                            env.set("CIPDB", value);
                        }
                        if let Some(value) = list {
                            env.set("CIPDB_IDS", value);
                        }
                        let mut request = CallRequest::new().with_condition(condition);
                        if let Some(id) = id {
                            request = request.with_id(id);
                        }

                        let evaluation = engine.evaluate(&request, &env);
                        assert_eq!(evaluation.triggered(), engine.should_trigger(&request, &env));
                        if !enabled {
                            assert_eq!(evaluation.decision, Decision::Skip);
                        }
                    }
                }
            }
        }
    }
}
