//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalog_domain::error::CatalogError;
use catalog_domain::record::Record;

/// JSON body of every message response: `{"message": "..."}`.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// The operation a handler was performing when it failed.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Self::List | Self::Get => "getting",
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }
}

/// Maps [`CatalogError`] to an HTTP response with appropriate status code.
///
/// Not-found errors become 404 with a descriptive message. Every other
/// failure becomes 500 with a generic message naming the operation; the
/// underlying cause is only logged.
pub struct ApiError {
    action: Action,
    subject: &'static str,
    source: CatalogError,
}

impl ApiError {
    /// Wrap a failure of `action` on records of kind `R`.
    pub fn new<R: Record>(action: Action, source: CatalogError) -> Self {
        let subject = match action {
            Action::List => R::PLURAL,
            _ => R::NOUN,
        };
        Self {
            action,
            subject,
            source,
        }
    }

    /// Closure form of [`ApiError::new`] for use with `map_err`.
    pub fn on<R: Record>(action: Action) -> impl FnOnce(CatalogError) -> Self {
        move |source| Self::new::<R>(action, source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.source {
            CatalogError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            err => {
                tracing::error!(error = ?err, subject = self.subject, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("error {} {}", self.action.verb(), self.subject),
                )
            }
        };

        (status, MessageBody::new(message)).into_response()
    }
}
