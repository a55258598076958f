use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid provider key {key:?}: expected namespace/name")]
    InvalidKey { key: String },

    #[error("Invalid assignment {assignment:?}: expected namespace/name=value")]
    InvalidAssignment { assignment: String },
}

impl ProviderError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    pub fn invalid_assignment(assignment: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            assignment: assignment.into(),
        }
    }
}
