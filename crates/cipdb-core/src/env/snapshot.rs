use serde::{Deserialize, Serialize};

use super::keys::EnvKeys;
use super::source::EnvSource;
use super::vocab::{falsy_word, split_ids};

/// How id-gated breakpoints behave for the current environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// No allow-list variable set: every id triggers
    Development,
    /// At least one allow-list variable set: only listed ids trigger
    Production,
}

/// Gate variables captured for a single decision.
///
/// Empty values are stored as `None`; they behave exactly like unset variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub disable: Option<String>,
    pub id: Option<String>,
    pub ids: Option<String>,
}

impl EnvSnapshot {
    /// Read the gate variables named by `keys` from `env`
    pub fn capture(env: &dyn EnvSource, keys: &EnvKeys) -> Self {
        Self {
            disable: read_non_empty(env, &keys.disable_var),
            id: read_non_empty(env, &keys.id_var),
            ids: read_non_empty(env, &keys.ids_var),
        }
    }

    /// The disable flag holds a falsy word
    pub fn disabled(&self) -> bool {
        self.disable.as_deref().is_some_and(falsy_word)
    }

    /// Merged allow-list: the single id first, then the list entries, without duplicates
    pub fn allow_list(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        if let Some(id) = &self.id {
            ids.push(id.clone());
        }
        if let Some(raw) = &self.ids {
            for id in split_ids(raw) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    pub fn id_mode(&self) -> IdMode {
        if self.allow_list().is_empty() {
            IdMode::Development
        } else {
            IdMode::Production
        }
    }
}

fn read_non_empty(env: &dyn EnvSource, name: &str) -> Option<String> {
    env.var(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
