use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;

use crate::modules::products::core::validation::{ProductPayload, ValidationError};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ValidationError::InvalidBody)?;
    let payload = ProductPayload::from_value(body)?;

    let product = state.create_product.handle(payload).await?;
    let location = location(&product.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(product)))
}

// URL path segment set: controls, space, `"#<>?`{}`, `/` and `%`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Retrieval address of a product, as sent in `Location`. The id is
/// percent-encoded, so any stored id yields a valid header value.
pub fn location(id: &str) -> String {
    format!("/products/{}", utf8_percent_encode(id, PATH_SEGMENT))
}
