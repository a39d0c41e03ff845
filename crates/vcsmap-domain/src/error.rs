use thiserror::Error;

/// Precondition violations raised by the mapping binding and rule adapters.
///
/// These are programming errors in the calling rule or engine; nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl MappingError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MappingError::InvalidArgument(message.into())
    }
}

/// A rule in the chain failed while evaluating one dependency.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("mapping rule '{rule}' failed for {requested}: {source}")]
pub struct RuleError {
    pub rule: String,
    pub requested: String,
    #[source]
    pub source: MappingError,
}
