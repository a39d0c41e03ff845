use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// `group:name` pair identifying a module independent of its version.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ModuleIdentifier {
    pub group: String,
    pub name: String,
}

impl ModuleIdentifier {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// Selector for an external module published to a repository.
///
/// `version` holds the raw constraint as written (`1.2`, `[1.0,2.0)`, `latest.release`),
/// or an empty string when none was given.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ModuleComponentSelector {
    pub group: String,
    pub module: String,
    #[serde(default)]
    pub version: String,
}

impl ModuleComponentSelector {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        }
    }

    pub fn module_id(&self) -> ModuleIdentifier {
        ModuleIdentifier::new(self.group.clone(), self.module.clone())
    }
}

/// Selector for a project that is part of a (possibly included) build.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ProjectComponentSelector {
    /// Name of the build that owns the project (`:` for the root build).
    pub build: String,
    /// Project path inside that build, e.g. `:lib:core`.
    pub path: String,
}

/// The requested side of an unresolved dependency.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentSelector {
    Module(ModuleComponentSelector),
    Project(ProjectComponentSelector),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorParseError {
    #[error("module notation is empty")]
    Empty,

    #[error("module notation '{input}' is missing the {part}")]
    MissingPart { input: String, part: &'static str },

    #[error("module notation '{input}' has too many parts (expected group:name[:version])")]
    TooManyParts { input: String },
}

impl ComponentSelector {
    pub fn module(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        ComponentSelector::Module(ModuleComponentSelector::new(group, module, version))
    }

    pub fn project(build: impl Into<String>, path: impl Into<String>) -> Self {
        ComponentSelector::Project(ProjectComponentSelector {
            build: build.into(),
            path: path.into(),
        })
    }

    /// Parse `group:name` or `group:name:version` into a module selector.
    pub fn parse(notation: &str) -> Result<Self, SelectorParseError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(SelectorParseError::Empty);
        }

        let parts: Vec<&str> = notation.split(':').collect();
        let (group, name, version) = match parts.as_slice() {
            [group, name] => (*group, *name, ""),
            [group, name, version] => (*group, *name, *version),
            [_] => {
                return Err(SelectorParseError::MissingPart {
                    input: notation.to_string(),
                    part: "module name",
                });
            }
            _ => {
                return Err(SelectorParseError::TooManyParts {
                    input: notation.to_string(),
                });
            }
        };

        if group.is_empty() {
            return Err(SelectorParseError::MissingPart {
                input: notation.to_string(),
                part: "group",
            });
        }
        if name.is_empty() {
            return Err(SelectorParseError::MissingPart {
                input: notation.to_string(),
                part: "module name",
            });
        }

        Ok(ComponentSelector::module(group, name, version))
    }

    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// The module coordinates this selector points at, if it targets an external module.
    pub fn module_id(&self) -> Option<ModuleIdentifier> {
        match self {
            ComponentSelector::Module(m) => Some(m.module_id()),
            ComponentSelector::Project(_) => None,
        }
    }

    /// The legacy module-version selector equivalent to this selector.
    ///
    /// Project selectors have no legacy shape.
    pub fn legacy(&self) -> Option<ModuleVersionSelector> {
        match self {
            ComponentSelector::Module(m) => Some(ModuleVersionSelector {
                group: m.group.clone(),
                name: m.module.clone(),
                version: if m.version.is_empty() {
                    None
                } else {
                    Some(m.version.clone())
                },
            }),
            ComponentSelector::Project(_) => None,
        }
    }
}

impl fmt::Display for ComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentSelector::Module(m) if m.version.is_empty() => {
                write!(f, "{}:{}", m.group, m.module)
            }
            ComponentSelector::Module(m) => write!(f, "{}:{}:{}", m.group, m.module, m.version),
            ComponentSelector::Project(p) if p.build == ":" => write!(f, "project {}", p.path),
            ComponentSelector::Project(p) => write!(f, "project :{}{}", p.build, p.path),
        }
    }
}

/// Older selector shape kept so rules written against `group`/`name`/`version` keep working.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct ModuleVersionSelector {
    pub group: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ModuleVersionSelector {
    pub fn module_id(&self) -> ModuleIdentifier {
        ModuleIdentifier::new(self.group.clone(), self.name.clone())
    }

    pub fn matches(&self, id: &ModuleIdentifier) -> bool {
        &self.module_id() == id
    }
}
