/// Core error types for Vinyl Player
use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Core error type for Vinyl Player
#[derive(Error, Debug)]
pub enum VinylError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind name, e.g. "track"
        entity: String,
        /// The id that failed to resolve
        id: String,
    },

    /// Caller-supplied input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Create on an existing id, or an optimistic write that kept losing
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backing key-value store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VinylError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for `Conflict`
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
