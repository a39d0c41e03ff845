//! Stable identifiers for resolution outcomes and rule diagnostics.
//!
//! Codes are short snake_case discriminators used in reports and log fields.

// Substitution outcomes
pub const OUTCOME_SOURCE: &str = "vcs_source";
pub const OUTCOME_ARTIFACT: &str = "artifact";
pub const OUTCOME_FAILED: &str = "rule_failed";

// Diagnostics
pub const CODE_REPOSITORY_OVERWRITTEN: &str = "repository_overwritten";
pub const CODE_INVALID_ARGUMENT: &str = "invalid_argument";

// Config
pub const SCHEMA_CONFIG_V1: &str = "vcsmap.config.v1";
