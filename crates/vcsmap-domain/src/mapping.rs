//! The per-dependency mapping binding that rules read and write.

use crate::error::MappingError;
use std::sync::Arc;
use vcsmap_types::{ComponentSelector, ModuleVersionSelector, VersionControlSpec};

/// One unresolved dependency as seen by the mapping rules.
///
/// The requested selectors are fixed at construction. The repository slot starts empty and is
/// written only through [`VcsMapping::attach_repository`]; a later attach replaces an earlier
/// one. A mapping lives for a single resolution attempt and is never shared between
/// dependencies.
#[derive(Debug)]
pub struct VcsMapping {
    requested: ComponentSelector,
    legacy_requested: Option<ModuleVersionSelector>,
    repository: Option<Arc<VersionControlSpec>>,
}

impl VcsMapping {
    /// `legacy_requested` is stored as given; it is not checked against `requested`.
    pub fn new(
        requested: ComponentSelector,
        legacy_requested: Option<ModuleVersionSelector>,
    ) -> Self {
        Self {
            requested,
            legacy_requested,
            repository: None,
        }
    }

    /// Build a mapping whose legacy selector is derived from `requested`.
    pub fn from_selector(requested: ComponentSelector) -> Self {
        let legacy_requested = requested.legacy();
        Self::new(requested, legacy_requested)
    }

    /// Construction for callers that hold the requested selector as an optional value.
    pub fn try_new(
        requested: Option<ComponentSelector>,
        legacy_requested: Option<ModuleVersionSelector>,
    ) -> Result<Self, MappingError> {
        let requested = requested.ok_or_else(|| {
            MappingError::invalid_argument("requested component selector cannot be null")
        })?;
        Ok(Self::new(requested, legacy_requested))
    }

    pub fn requested(&self) -> &ComponentSelector {
        &self.requested
    }

    pub fn legacy_requested(&self) -> Option<&ModuleVersionSelector> {
        self.legacy_requested.as_ref()
    }

    /// Bind `repository` to this dependency, returning whatever was bound before.
    pub fn attach_repository(
        &mut self,
        repository: impl Into<Arc<VersionControlSpec>>,
    ) -> Option<Arc<VersionControlSpec>> {
        self.repository.replace(repository.into())
    }

    /// Like [`VcsMapping::attach_repository`], but rejects an absent repository and leaves the
    /// current binding untouched in that case.
    pub fn try_attach_repository(
        &mut self,
        repository: Option<Arc<VersionControlSpec>>,
    ) -> Result<Option<Arc<VersionControlSpec>>, MappingError> {
        let repository = repository
            .ok_or_else(|| MappingError::invalid_argument("VCS repository cannot be null"))?;
        Ok(self.attach_repository(repository))
    }

    pub fn repository(&self) -> Option<&Arc<VersionControlSpec>> {
        self.repository.as_ref()
    }

    pub fn has_repository(&self) -> bool {
        self.repository.is_some()
    }

    pub fn into_parts(
        self,
    ) -> (
        ComponentSelector,
        Option<ModuleVersionSelector>,
        Option<Arc<VersionControlSpec>>,
    ) {
        (self.requested, self.legacy_requested, self.repository)
    }
}
