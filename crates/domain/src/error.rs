//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatalogError`]
//! via `#[from]` (or an explicit `From` impl for boxed storage errors).

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested key does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A request body could not be decoded into a record.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The key in a request could not be read (e.g. it is not UTF-8).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The backing store failed (connectivity, constraint violation, ...).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by key found no row.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Singular noun of the record kind (e.g. `carrera`).
    pub entity: &'static str,
    /// The key that was looked up.
    pub id: String,
}

/// A request body that does not describe a record.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Not valid JSON, a missing field, or a value that could not be coerced
    /// to the field's type.
    #[error("invalid payload")]
    Json(#[from] serde_json::Error),

    /// The body was not declared as JSON.
    #[error("unsupported content type {0:?}")]
    ContentType(Option<String>),

    /// The body could not be read (e.g. it exceeds the size limit).
    #[error("unreadable body: {0}")]
    Unreadable(String),
}
