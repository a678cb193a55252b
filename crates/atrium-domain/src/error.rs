//! The domain failure taxonomy.
//!
//! Every fallible operation in the backend reports through this one
//! enum. Validation failures and geometric conflicts are both
//! `InvalidInput`: a placement conflict depends on persisted state, but
//! from the client's point of view it is still a rejected request, not
//! a server fault.

/// Errors produced by domain operations.
///
/// The HTTP layer maps each variant onto a status code
/// (`InvalidInput` → 400, `NotFound` → 404, `AlreadyExists` → 409,
/// `Unauthorized` → 401, `Storage` → 503).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The request payload failed validation, or the requested placement
    /// conflicts with existing entities.
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness rule was violated.
    #[error("a {entity} with the same {field} already exists")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
    },

    /// The caller is not allowed to perform this operation.
    ///
    /// Nothing in this repository produces the variant today; it exists
    /// so gateway layers can map upstream auth failures into the same
    /// taxonomy.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The persistence layer failed. Surfaced to clients as a 503.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidInput`] failure.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Shorthand for a [`DomainError::NotFound`] failure.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Shorthand for an [`DomainError::AlreadyExists`] failure.
    pub fn already_exists(entity: &'static str, field: &'static str) -> Self {
        Self::AlreadyExists { entity, field }
    }

    /// Returns `true` if the failure is a client-side rejection rather
    /// than a server fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Result alias used by every domain operation.
pub type DomainResult<T> = Result<T, DomainError>;
