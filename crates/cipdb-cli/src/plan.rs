//! Environment changes for the launched program

use cipdb_core::{EnvAssignment, EnvKeys, EnvSource};

use crate::cli::Cli;
use crate::settings::LauncherSettings;

/// Ordered variable changes; later assignments to the same key win
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvPlan {
    set: Vec<(String, String)>,
    remove: Vec<String>,
}

impl EnvPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine settings and flags.
    ///
    /// Order: settings `env`, `--env` flags, allow-list ids, then the disable
    /// flag. `--disable` wins over `--enable`.
    pub fn build(cli: &Cli, settings: &LauncherSettings) -> anyhow::Result<Self> {
        let keys = &settings.gate.env;
        let mut plan = Self::new();

        for spec in &settings.env {
            plan.apply(EnvAssignment::parse(spec)?);
        }
        for assignment in &cli.env {
            plan.apply(assignment.clone());
        }

        if let Some(id) = &cli.id {
            plan.set(&keys.id_var, id);
        }
        if let Some(ids) = cli.ids.as_ref().or(settings.ids.as_ref()) {
            plan.set(&keys.ids_var, ids);
        }

        if cli.disable {
            plan.set(&keys.disable_var, "false");
        } else if cli.enable {
            plan.unset(&keys.disable_var);
        }

        Ok(plan)
    }

    pub fn apply(&mut self, assignment: EnvAssignment) {
        self.set(&assignment.key, &assignment.value);
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.remove.retain(|removed| removed != key);
        self.set.retain(|(existing, _)| existing != key);
        self.set.push((key.to_string(), value.to_string()));
    }

    pub fn unset(&mut self, key: &str) {
        self.set.retain(|(existing, _)| existing != key);
        if !self.remove.iter().any(|removed| removed == key) {
            self.remove.push(key.to_string());
        }
    }

    pub fn assignments(&self) -> &[(String, String)] {
        &self.set
    }

    pub fn removals(&self) -> &[String] {
        &self.remove
    }

    /// Apply the changes to a child process command
    pub fn apply_to(&self, command: &mut std::process::Command) {
        for key in &self.remove {
            command.env_remove(key);
        }
        for (key, value) in &self.set {
            command.env(key, value);
        }
    }

    /// The environment the launched program will see, on top of `base`
    pub fn overlay<'a>(&'a self, base: &'a dyn EnvSource) -> PlannedEnv<'a> {
        PlannedEnv { plan: self, base }
    }

    /// Gate variable names touched by this plan
    pub fn touches_gate(&self, keys: &EnvKeys) -> bool {
        [&keys.disable_var, &keys.id_var, &keys.ids_var]
            .iter()
            .any(|key| {
                self.set.iter().any(|(existing, _)| existing == *key)
                    || self.remove.iter().any(|removed| removed == *key)
            })
    }
}

/// An [`EnvSource`] view of a plan layered over another source
pub struct PlannedEnv<'a> {
    plan: &'a EnvPlan,
    base: &'a dyn EnvSource,
}

impl EnvSource for PlannedEnv<'_> {
    fn var(&self, name: &str) -> Option<String> {
        if self.plan.remove.iter().any(|removed| removed == name) {
            return None;
        }
        if let Some((_, value)) = self.plan.set.iter().find(|(key, _)| key == name) {
            return Some(value.clone());
        }
        self.base.var(name)
    }
}
