//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::VcsMapConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `vcsmap.toml` (or equivalent) into a typed model.
///
/// Blank input is not an error and yields the default model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<VcsMapConfigV1> {
    if input.trim().is_empty() {
        return Ok(VcsMapConfigV1::default());
    }
    let cfg: VcsMapConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the resolution pass (file values + overrides).
pub fn resolve_config(cfg: VcsMapConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `vcsmap.toml`, for editor and CI tooling.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(VcsMapConfigV1)
}
