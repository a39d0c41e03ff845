use crate::policy::{EffectiveConfig, OverwritePolicy, RuleErrorPolicy};
use vcsmap_types::{ComponentSelector, VersionControlSpec};

pub fn module_selector(group: &str, module: &str, version: &str) -> ComponentSelector {
    ComponentSelector::module(group, module, version)
}

pub fn git_spec(url: &str) -> VersionControlSpec {
    VersionControlSpec::git(url)
}

pub fn config(on_overwrite: OverwritePolicy, on_rule_error: RuleErrorPolicy) -> EffectiveConfig {
    EffectiveConfig {
        on_overwrite,
        on_rule_error,
    }
}
