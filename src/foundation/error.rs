/// Convenience result type used across the editor core.
pub type MyomResult<T> = Result<T, MyomError>;

/// Top-level error taxonomy used by editor APIs.
///
/// Every variant is recoverable from the editing session's point of view: a failed export or
/// capture never leaves the document in an inconsistent state.
#[derive(thiserror::Error, Debug)]
pub enum MyomError {
    /// Invalid user-provided data, configuration or patch.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was requested before the view was laid out.
    #[error("not ready: {0}")]
    NotReady(String),

    /// Camera or file access was denied or unavailable.
    #[error("acquisition error: {0}")]
    Acquisition(String),

    /// The external rasterizer (or PNG encoding of its output) failed.
    #[error("rasterization error: {0}")]
    Rasterization(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MyomError {
    /// Build a [`MyomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MyomError::NotReady`] value.
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    /// Build a [`MyomError::Acquisition`] value.
    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::Acquisition(msg.into())
    }

    /// Build a [`MyomError::Rasterization`] value.
    pub fn rasterization(msg: impl Into<String>) -> Self {
        Self::Rasterization(msg.into())
    }

    /// Build a [`MyomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
