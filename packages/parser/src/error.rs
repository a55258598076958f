use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

/// Precondition failures of a substitution pass.
///
/// These are raised before any output is produced. A single malformed token
/// is never one of these; it is left in the document untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Invalid URL prefix: expected a non-empty string")]
    InvalidPrefix,

    #[error("Invalid token replacer: expected a callable taking one token")]
    InvalidReplacer,

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },
}

impl SwapError {
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}

/// Reason a token body could not be parsed under either grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenParseError {
    #[error("Token body is neither shorthand nor a JSON object: {message}")]
    InvalidJson { message: String },

    #[error("Token object has no string \"name\" field")]
    MissingName,

    #[error("Token name {name:?} is not of the form namespace/name")]
    InvalidName { name: String },

    #[error("Token \"fallback\" must be a string, number or boolean")]
    InvalidFallback,
}

impl TokenParseError {
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Short label used when pointing at the offending token in a report.
    pub fn label(&self) -> String {
        match self {
            TokenParseError::InvalidJson { .. } => "malformed token body".to_string(),
            TokenParseError::MissingName => "missing \"name\"".to_string(),
            TokenParseError::InvalidName { name } => format!("bad name {:?}", name),
            TokenParseError::InvalidFallback => "non-scalar fallback".to_string(),
        }
    }
}
