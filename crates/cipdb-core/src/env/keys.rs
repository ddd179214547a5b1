use serde::{Deserialize, Serialize};

/// Default disable flag variable
pub const DISABLE_VAR: &str = "CIPDB";
/// Default single-id allow-list variable
pub const ID_VAR: &str = "CIPDB_ID";
/// Default comma-separated allow-list variable
pub const IDS_VAR: &str = "CIPDB_IDS";

/// Names of the variables the gate reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvKeys {
    pub disable_var: String,
    pub id_var: String,
    pub ids_var: String,
}

impl EnvKeys {
    /// Keys sharing a common prefix: `<P>`, `<P>_ID`, `<P>_IDS`
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            disable_var: prefix.to_string(),
            id_var: format!("{}_ID", prefix),
            ids_var: format!("{}_IDS", prefix),
        }
    }
}

impl Default for EnvKeys {
    fn default() -> Self {
        Self {
            disable_var: DISABLE_VAR.to_string(),
            id_var: ID_VAR.to_string(),
            ids_var: IDS_VAR.to_string(),
        }
    }
}
