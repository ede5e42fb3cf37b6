use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Context-wrapping error for user operations.
///
/// Both the repository and the service wrap failures with an
/// operation-level message, so callers observe a two-level chain via
/// `Display`, e.g.
///
/// ```text
/// failed get user: failed get user: connection reset
/// ```
///
/// The source is boxed so a storage error and an already-wrapped
/// `UserError` can both be wrapped the same way.
#[derive(Debug, Error)]
#[error("{context}: {source}")]
pub struct UserError {
    context: &'static str,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl UserError {
    /// Wrap an underlying error with an operation-level context message.
    pub fn wrap<E>(context: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            context,
            source: source.into(),
        }
    }
}

pub type UserResult<T> = Result<T, UserError>;

/// Storage failures surface as 500 with the full wrapped message in the
/// body. Client input errors never reach this type; handlers answer those
/// with a bare 400.
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal server error: {}", self),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_chains_contexts() {
        let storage = std::io::Error::other("connection reset");
        let repo_err = UserError::wrap("failed get user", storage);
        let service_err = UserError::wrap("failed get user", repo_err);

        assert_eq!(
            service_err.to_string(),
            "failed get user: failed get user: connection reset"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = UserError::wrap("failed find users", std::io::Error::other("boom"));
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }
}
