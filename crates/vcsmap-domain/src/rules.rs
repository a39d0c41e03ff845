//! Mapping rules and the ordered chain that runs them.
//!
//! The chain encodes no matching policy of its own: every rule sees the mapping in order and
//! may attach a repository. Whatever is bound after the last rule is the result.

use crate::error::{MappingError, RuleError};
use crate::mapping::VcsMapping;
use crate::policy::{EffectiveConfig, OverwritePolicy};
use globset::{Glob, GlobMatcher};
use std::fmt;
use std::sync::Arc;
use tracing::{Level, debug, trace, warn};
use vcsmap_types::{ComponentSelector, VersionControlSpec, ids};

pub trait MappingRule: Send + Sync {
    /// Name used in diagnostics and rule errors.
    fn name(&self) -> &str;

    fn apply(&self, mapping: &mut VcsMapping) -> Result<(), MappingError>;
}

/// A rule backed by a closure.
pub struct FnRule<F> {
    name: String,
    f: F,
}

pub fn rule_fn<F>(name: impl Into<String>, f: F) -> FnRule<F>
where
    F: Fn(&mut VcsMapping) -> Result<(), MappingError> + Send + Sync,
{
    FnRule {
        name: name.into(),
        f,
    }
}

impl<F> MappingRule for FnRule<F>
where
    F: Fn(&mut VcsMapping) -> Result<(), MappingError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, mapping: &mut VcsMapping) -> Result<(), MappingError> {
        (self.f)(mapping)
    }
}

/// Attaches a fixed repository to every module whose `group:name` matches a glob.
///
/// Project selectors never match.
#[derive(Debug)]
pub struct ModuleRule {
    name: String,
    matcher: GlobMatcher,
    repository: Arc<VersionControlSpec>,
}

pub fn for_module(
    pattern: &str,
    repository: impl Into<Arc<VersionControlSpec>>,
) -> Result<ModuleRule, MappingError> {
    let glob = Glob::new(pattern).map_err(|e| {
        MappingError::invalid_argument(format!("invalid module pattern '{pattern}': {e}"))
    })?;
    Ok(ModuleRule {
        name: format!("for_module({pattern})"),
        matcher: glob.compile_matcher(),
        repository: repository.into(),
    })
}

impl ModuleRule {
    pub fn matches(&self, requested: &ComponentSelector) -> bool {
        requested
            .module_id()
            .map(|id| self.matcher.is_match(id.to_string()))
            .unwrap_or(false)
    }
}

impl MappingRule for ModuleRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, mapping: &mut VcsMapping) -> Result<(), MappingError> {
        if self.matches(mapping.requested()) {
            mapping.attach_repository(Arc::clone(&self.repository));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RuleChain {
    rules: Vec<Box<dyn MappingRule>>,
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}

impl RuleChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<R: MappingRule + 'static>(&mut self, rule: R) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn with<R: MappingRule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `mapping`, in order.
    ///
    /// The first failing rule stops the chain; bindings made by earlier rules stay in place.
    pub fn apply(&self, mapping: &mut VcsMapping, cfg: &EffectiveConfig) -> Result<(), RuleError> {
        for rule in &self.rules {
            trace!(rule = rule.name(), requested = %mapping.requested(), "applying mapping rule");

            let before = mapping.repository().cloned();
            rule.apply(mapping).map_err(|source| RuleError {
                rule: rule.name().to_string(),
                requested: mapping.requested().to_string(),
                source,
            })?;

            let replaced = overwritten(before.as_ref(), mapping.repository());
            if let Some((previous, current)) = replaced {
                report_overwrite(cfg.on_overwrite, rule.name(), mapping, previous, current);
            }
        }
        Ok(())
    }
}

/// The replaced and replacing specs when a rule swapped one bound repository for a different
/// one. Binding into an empty slot, or re-binding an equal spec, is not an overwrite.
fn overwritten<'a>(
    before: Option<&'a Arc<VersionControlSpec>>,
    after: Option<&'a Arc<VersionControlSpec>>,
) -> Option<(&'a VersionControlSpec, &'a VersionControlSpec)> {
    match (before, after) {
        (Some(previous), Some(current)) if previous != current => {
            Some((previous.as_ref(), current.as_ref()))
        }
        _ => None,
    }
}

fn overwrite_level(policy: OverwritePolicy) -> Option<Level> {
    match policy {
        OverwritePolicy::Silent => None,
        OverwritePolicy::Debug => Some(Level::DEBUG),
        OverwritePolicy::Warn => Some(Level::WARN),
    }
}

fn report_overwrite(
    policy: OverwritePolicy,
    rule: &str,
    mapping: &VcsMapping,
    previous: &VersionControlSpec,
    current: &VersionControlSpec,
) {
    let Some(level) = overwrite_level(policy) else {
        return;
    };
    if level == Level::WARN {
        warn!(
            code = ids::CODE_REPOSITORY_OVERWRITTEN,
            rule,
            requested = %mapping.requested(),
            previous = %previous.unique_id(),
            current = %current.unique_id(),
            "mapping rule replaced a previously attached repository"
        );
    } else {
        debug!(
            code = ids::CODE_REPOSITORY_OVERWRITTEN,
            rule,
            requested = %mapping.requested(),
            previous = %previous.unique_id(),
            current = %current.unique_id(),
            "mapping rule replaced a previously attached repository"
        );
    }
}
