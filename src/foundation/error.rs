/// Convenience result type used across scrollcue.
pub type ScrollCueResult<T> = Result<T, ScrollCueError>;

/// Top-level error taxonomy used by runtime APIs.
///
/// None of these are fatal to a scan: the runtime turns handler errors into
/// [`Diagnostic`](crate::Diagnostic)s and moves on to the next declaration.
#[derive(thiserror::Error, Debug)]
pub enum ScrollCueError {
    /// Invalid host-provided data (markup, config, trigger specs).
    #[error("validation error: {0}")]
    Validation(String),

    /// A document operation referenced a node that does not exist or has the wrong kind.
    #[error("document error: {0}")]
    Document(String),

    /// Errors while resolving or sampling a timeline description.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollCueError {
    /// Build a [`ScrollCueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollCueError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`ScrollCueError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ScrollCueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollCueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
