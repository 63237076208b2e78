use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Application-level error type for HTTP handlers.
///
/// Converts into a bare status response tagged with an [`ErrorPage`]
/// extension; the web layer swaps the body for the localized error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The record does not exist, is inactive, or the id is malformed.
    #[error("Not found")]
    NotFound,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything else, usually a backend failure.
    #[error(transparent)]
    Internal(anyhow::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Which error page the web layer should render for a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPage {
    NotFound,
    BadRequest,
    Internal,
}

impl From<anyhow::Error> for AppError {
    /// `RowNotFound` anywhere in the chain maps to 404.
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<sqlx::Error>() {
            Some(sqlx::Error::RowNotFound) => AppError::NotFound,
            _ => AppError::Internal(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn page(&self) -> ErrorPage {
        match self {
            AppError::NotFound => ErrorPage::NotFound,
            AppError::BadRequest(_) => ErrorPage::BadRequest,
            AppError::Internal(_) => ErrorPage::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(err) => tracing::error!(error = ?err, "Request failed"),
            AppError::BadRequest(msg) => tracing::warn!(error = %msg, "Bad request"),
            AppError::NotFound => {}
        }

        let mut response = self.status().into_response();
        response.extensions_mut().insert(self.page());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: anyhow::Result<()> = Err(sqlx::Error::RowNotFound).context("Failed to fetch yacht");
        let app_err = AppError::from(err.unwrap_err());
        assert!(matches!(app_err, AppError::NotFound));
        assert_eq!(app_err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let app_err = AppError::from(anyhow::anyhow!("Storage API error (500): boom"));
        assert!(matches!(app_err, AppError::Internal(_)));
        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_tags_error_page() {
        let response = AppError::BadRequest("bad id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.extensions().get::<ErrorPage>(), Some(&ErrorPage::BadRequest));
    }
}
