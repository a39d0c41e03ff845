use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `vcsmap.toml` schema v1.
///
/// Values are kept as strings so unknown spellings are reported by the resolver with the
/// accepted alternatives, rather than as a bare deserialization error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VcsMapConfigV1 {
    /// Optional schema string for tooling (`vcsmap.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Diagnostic emitted when a rule replaces an attached repository: `silent`, `debug`
    /// (default), or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_overwrite: Option<String>,

    /// What to do when a mapping rule fails: `abort` (default) or `skip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_rule_error: Option<String>,
}
