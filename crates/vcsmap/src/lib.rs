//! Redirect unresolved module dependencies to version-control source builds.
//!
//! A resolution engine builds one [`VcsMapping`] per unresolved dependency, runs a
//! [`RuleChain`] over it, and reads back whether a [`VersionControlSpec`] was attached:
//!
//! ```
//! use vcsmap::{ComponentSelector, EffectiveConfig, RuleChain, VersionControlSpec, for_module};
//!
//! let chain = RuleChain::new().with(
//!     for_module("org.widgets:*", VersionControlSpec::git("https://example.com/widgets.git"))
//!         .expect("valid pattern"),
//! );
//! let requests = vec![ComponentSelector::parse("org.widgets:core:1.0").expect("notation")];
//!
//! let report = vcsmap::resolve(requests, &chain, &EffectiveConfig::default()).expect("resolve");
//! assert_eq!(report.counts.source, 1);
//! ```

#![forbid(unsafe_code)]

pub use vcsmap_domain::policy::{EffectiveConfig, OverwritePolicy, RuleErrorPolicy};
pub use vcsmap_domain::report::{MappingOutcome, OutcomeCounts, ResolutionReport, Substitution};
pub use vcsmap_domain::{
    FnRule, MappingError, MappingRule, ModuleRule, RuleChain, RuleError, VcsMapping, for_module,
    resolve, rule_fn, substitution_for,
};
pub use vcsmap_settings::{
    Overrides, ResolvedConfig, VcsMapConfigV1, parse_config_toml, resolve_config,
};
pub use vcsmap_types::{
    ComponentSelector, ModuleComponentSelector, ModuleIdentifier, ModuleVersionSelector,
    ProjectComponentSelector, RevisionPolicy, SelectorParseError, VcsKind, VersionControlSpec,
    ids,
};
