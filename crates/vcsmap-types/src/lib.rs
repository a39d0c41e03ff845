//! Stable value types shared across the vcsmap workspace.
//!
//! This crate is intentionally boring:
//! - component selectors (current and legacy shapes)
//! - declarative version-control repository specs
//! - stable string IDs for resolution outcomes

#![forbid(unsafe_code)]

pub mod ids;
pub mod selector;
pub mod vcs;

pub use selector::{
    ComponentSelector, ModuleComponentSelector, ModuleIdentifier, ModuleVersionSelector,
    ProjectComponentSelector, SelectorParseError,
};
pub use vcs::{RevisionPolicy, VcsKind, VersionControlSpec};
