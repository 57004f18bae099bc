use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// A closed set of variants; the api crate maps these to HTTP status codes
/// at the `IntoResponse` boundary and nowhere else.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Client-supplied input is missing or malformed. Never retried.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Any unexpected internal failure. The message is for server-side
    /// logs; callers only ever see a generic response.
    #[error("{0}")]
    Internal(String),
}
