use crate::model::VcsMapConfigV1;
use anyhow::Context;
use vcsmap_domain::policy::{EffectiveConfig, OverwritePolicy, RuleErrorPolicy};
use vcsmap_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub on_overwrite: Option<String>,
    pub on_rule_error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: VcsMapConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != ids::SCHEMA_CONFIG_V1 {
            anyhow::bail!(
                "unsupported config schema: {schema} (expected {})",
                ids::SCHEMA_CONFIG_V1
            );
        }
    }

    let mut effective = EffectiveConfig::default();

    if let Some(v) = overrides.on_overwrite.or(cfg.on_overwrite) {
        effective.on_overwrite = parse_overwrite(&v).context("resolve on_overwrite")?;
    }

    if let Some(v) = overrides.on_rule_error.or(cfg.on_rule_error) {
        effective.on_rule_error = parse_rule_error(&v).context("resolve on_rule_error")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_overwrite(v: &str) -> anyhow::Result<OverwritePolicy> {
    match v {
        "silent" | "off" => Ok(OverwritePolicy::Silent),
        "debug" => Ok(OverwritePolicy::Debug),
        "warn" | "warning" => Ok(OverwritePolicy::Warn),
        other => anyhow::bail!("unknown on_overwrite: {other} (expected silent|debug|warn)"),
    }
}

fn parse_rule_error(v: &str) -> anyhow::Result<RuleErrorPolicy> {
    match v {
        "abort" => Ok(RuleErrorPolicy::Abort),
        "skip" => Ok(RuleErrorPolicy::Skip),
        other => anyhow::bail!("unknown on_rule_error: {other} (expected abort|skip)"),
    }
}
