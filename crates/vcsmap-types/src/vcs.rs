use camino::Utf8PathBuf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum VcsKind {
    #[default]
    Git,
}

impl VcsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
        }
    }
}

/// Which revision of the repository should back the dependency.
///
/// Purely declarative: selecting and pinning the revision happens at checkout time.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "policy", content = "name", rename_all = "snake_case")]
pub enum RevisionPolicy {
    #[default]
    Latest,
    Branch(String),
    Tag(String),
}

/// Declarative description of where the source for a dependency lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct VersionControlSpec {
    #[serde(default)]
    pub kind: VcsKind,

    pub url: String,

    /// Directory inside the repository containing the build, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub root_dir: Option<Utf8PathBuf>,

    #[serde(default)]
    pub revision: RevisionPolicy,
}

impl VersionControlSpec {
    pub fn git(url: impl Into<String>) -> Self {
        Self {
            kind: VcsKind::Git,
            url: url.into(),
            root_dir: None,
            revision: RevisionPolicy::Latest,
        }
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<Utf8PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.revision = RevisionPolicy::Branch(branch.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.revision = RevisionPolicy::Tag(tag.into());
        self
    }

    pub fn display_name(&self) -> String {
        match self.kind {
            VcsKind::Git => format!("Git Repository at {}", self.url),
        }
    }

    /// Identity of the repository, stable across builds. Two specs with the same id share a
    /// checkout.
    pub fn unique_id(&self) -> String {
        format!("{}-repo:{}", self.kind.as_str(), self.url)
    }

    /// Short name derived from the last URL path segment, without a `.git` suffix.
    pub fn repo_name(&self) -> String {
        let trimmed = self.url.trim_end_matches('/');
        let last = trimmed.rsplit(['/', ':']).next().unwrap_or(trimmed);
        let name = last.strip_suffix(".git").unwrap_or(last);
        if name.is_empty() {
            self.kind.as_str().to_string()
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for VersionControlSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_spec_ids_are_derived_from_url() {
        let spec = VersionControlSpec::git("https://github.com/acme/widgets.git");
        assert_eq!(
            spec.display_name(),
            "Git Repository at https://github.com/acme/widgets.git"
        );
        assert_eq!(
            spec.unique_id(),
            "git-repo:https://github.com/acme/widgets.git"
        );
        assert_eq!(spec.repo_name(), "widgets");
    }

    #[test]
    fn repo_name_handles_scp_style_and_trailing_slash() {
        assert_eq!(
            VersionControlSpec::git("git@example.com:widgets.git").repo_name(),
            "widgets"
        );
        assert_eq!(
            VersionControlSpec::git("file:///srv/repos/gadgets/").repo_name(),
            "gadgets"
        );
        assert_eq!(VersionControlSpec::git("").repo_name(), "git");
    }

    #[test]
    fn builders_set_declarative_fields() {
        let spec = VersionControlSpec::git("https://example.com/r.git")
            .with_root_dir("lib")
            .with_tag("v1.0");
        assert_eq!(spec.root_dir.as_deref().map(|p| p.as_str()), Some("lib"));
        assert_eq!(spec.revision, RevisionPolicy::Tag("v1.0".to_string()));

        let spec = spec.with_branch("main");
        assert_eq!(spec.revision, RevisionPolicy::Branch("main".to_string()));
    }

    #[test]
    fn deserializes_with_defaults() {
        let spec: VersionControlSpec =
            serde_json::from_str(r#"{"url":"https://example.com/r.git"}"#).expect("parse");
        assert_eq!(spec, VersionControlSpec::git("https://example.com/r.git"));
    }
}
