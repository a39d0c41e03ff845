use std::sync::Arc;
use vcsmap_types::{ComponentSelector, VersionControlSpec, ids};

/// What the resolution engine should do with one dependency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Substitution {
    /// Build the dependency from this repository instead of fetching an artifact.
    Source(Arc<VersionControlSpec>),
    /// No rule attached a repository; resolve the published artifact as usual.
    Artifact,
    /// A rule failed and the pass was configured to keep going.
    Failed { rule: String, message: String },
}

impl Substitution {
    pub fn code(&self) -> &'static str {
        match self {
            Substitution::Source(_) => ids::OUTCOME_SOURCE,
            Substitution::Artifact => ids::OUTCOME_ARTIFACT,
            Substitution::Failed { .. } => ids::OUTCOME_FAILED,
        }
    }

    pub fn repository(&self) -> Option<&Arc<VersionControlSpec>> {
        match self {
            Substitution::Source(spec) => Some(spec),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingOutcome {
    pub requested: ComponentSelector,
    pub substitution: Substitution,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub source: u32,
    pub artifact: u32,
    pub failed: u32,
}

impl OutcomeCounts {
    pub fn from_outcomes(outcomes: &[MappingOutcome]) -> Self {
        let mut counts = OutcomeCounts::default();
        for o in outcomes {
            match o.substitution {
                Substitution::Source(_) => counts.source += 1,
                Substitution::Artifact => counts.artifact += 1,
                Substitution::Failed { .. } => counts.failed += 1,
            }
        }
        counts
    }
}

/// Outcomes in the same order as the requests that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub outcomes: Vec<MappingOutcome>,
    pub counts: OutcomeCounts,
}

impl ResolutionReport {
    pub fn new(outcomes: Vec<MappingOutcome>) -> Self {
        let counts = OutcomeCounts::from_outcomes(&outcomes);
        Self { outcomes, counts }
    }

    /// First outcome recorded for `requested`, if it was part of the pass.
    pub fn outcome_for(&self, requested: &ComponentSelector) -> Option<&MappingOutcome> {
        self.outcomes.iter().find(|o| &o.requested == requested)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&ComponentSelector, &Arc<VersionControlSpec>)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.substitution.repository().map(|spec| (&o.requested, spec)))
    }
}
