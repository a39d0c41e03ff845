//! Pure VCS mapping evaluation (no IO).
//!
//! Input: unresolved component selectors plus an ordered chain of mapping rules.
//! Output: one substitution decision per selector (VCS source build or normal artifact).

#![forbid(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{resolve, substitution_for};
pub use error::{MappingError, RuleError};
pub use mapping::VcsMapping;
pub use rules::{FnRule, MappingRule, ModuleRule, RuleChain, for_module, rule_fn};
