// HTTP error boundary.
//
// Every failure leaves the service as a single-key JSON object. Internal
// failures are logged with their detail and answered with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;

use crate::modules::products::core::errors::ApplicationError;
use crate::modules::products::core::validation::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    Application(ApplicationError),
    InvalidQuery,
    RouteNotFound,
    Internal,
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::Application(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Application(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Application(ApplicationError::Filter(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Application(ApplicationError::Validation(err)) => {
                tracing::debug!(error = %err, "request rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Application(ApplicationError::NotFound) => {
                (StatusCode::NOT_FOUND, ApplicationError::NotFound.to_string())
            }
            ApiError::Application(ApplicationError::Repository(err)) => {
                tracing::error!(error = %err, "request failed");
                internal()
            }
            ApiError::InvalidQuery => (StatusCode::BAD_REQUEST, "invalid query string".into()),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "route not found".into()),
            ApiError::Internal => internal(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".into(),
    )
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Turns a panic inside a handler into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::Internal.into_response()
}
