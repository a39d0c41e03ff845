//! Property-based tests for the mapping binding and the resolution pass.
//!
//! These tests use proptest to verify invariants around:
//! - identity of the requested selectors
//! - last-write-wins repository binding
//! - isolation between mappings and ordering of outcomes

use crate::engine::resolve;
use crate::mapping::VcsMapping;
use crate::policy::EffectiveConfig;
use crate::report::Substitution;
use crate::rules::{RuleChain, for_module};
use proptest::prelude::*;
use std::sync::Arc;
use vcsmap_types::{ComponentSelector, VersionControlSpec};

// ============================================================================
// Strategies
// ============================================================================

fn arb_group() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}(\\.[a-z][a-z0-9]{0,7}){0,2}").unwrap()
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

fn arb_version() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        Just("latest.release".to_string()),
    ]
}

fn arb_module_selector() -> impl Strategy<Value = ComponentSelector> {
    (arb_group(), arb_name(), arb_version())
        .prop_map(|(g, n, v)| ComponentSelector::module(g, n, v))
}

fn arb_selector() -> impl Strategy<Value = ComponentSelector> {
    prop_oneof![
        4 => arb_module_selector(),
        1 => arb_name().prop_map(|n| ComponentSelector::project(":", format!(":{n}"))),
    ]
}

fn arb_spec() -> impl Strategy<Value = VersionControlSpec> {
    arb_name().prop_map(|n| VersionControlSpec::git(format!("https://example.com/{n}.git")))
}

// ============================================================================
// Binding invariants
// ============================================================================

proptest! {
    #[test]
    fn requested_selectors_round_trip_unchanged(selector in arb_selector()) {
        let legacy = selector.legacy();
        let mapping = VcsMapping::new(selector.clone(), legacy.clone());

        prop_assert_eq!(mapping.requested(), &selector);
        prop_assert_eq!(mapping.legacy_requested(), legacy.as_ref());
        prop_assert!(!mapping.has_repository());
    }

    #[test]
    fn last_attached_repository_wins(
        selector in arb_selector(),
        specs in prop::collection::vec(arb_spec(), 1..8),
    ) {
        let mut mapping = VcsMapping::from_selector(selector);
        let specs: Vec<Arc<VersionControlSpec>> = specs.into_iter().map(Arc::new).collect();

        for spec in &specs {
            mapping.attach_repository(Arc::clone(spec));
        }

        let last = specs.last().unwrap();
        prop_assert!(mapping.has_repository());
        prop_assert!(Arc::ptr_eq(mapping.repository().unwrap(), last));
    }

    #[test]
    fn rejected_attach_never_changes_binding(
        selector in arb_selector(),
        spec in prop::option::of(arb_spec()),
    ) {
        let mut mapping = VcsMapping::from_selector(selector);
        let bound = spec.map(Arc::new);
        if let Some(ref s) = bound {
            mapping.attach_repository(Arc::clone(s));
        }

        prop_assert!(mapping.try_attach_repository(None).is_err());
        prop_assert_eq!(mapping.repository(), bound.as_ref());
        prop_assert_eq!(mapping.has_repository(), bound.is_some());
    }
}

// ============================================================================
// Resolution pass
// ============================================================================

proptest! {
    #[test]
    fn outcomes_follow_request_order(selectors in prop::collection::vec(arb_selector(), 0..16)) {
        let all = VersionControlSpec::git("https://example.com/all.git");
        let chain = RuleChain::new().with(for_module("*:*", all).unwrap());

        let report = resolve(selectors.clone(), &chain, &EffectiveConfig::default()).unwrap();

        let requested: Vec<&ComponentSelector> =
            report.outcomes.iter().map(|o| &o.requested).collect();
        prop_assert_eq!(requested, selectors.iter().collect::<Vec<_>>());

        let modules = selectors.iter().filter(|s| s.module_id().is_some()).count() as u32;
        prop_assert_eq!(report.counts.source, modules);
        prop_assert_eq!(report.counts.artifact, selectors.len() as u32 - modules);
        prop_assert_eq!(report.counts.failed, 0);
    }

    #[test]
    fn empty_chain_never_substitutes(selectors in prop::collection::vec(arb_selector(), 0..16)) {
        let report = resolve(selectors, &RuleChain::new(), &EffectiveConfig::default()).unwrap();
        prop_assert!(report.outcomes.iter().all(|o| o.substitution == Substitution::Artifact));
    }
}
