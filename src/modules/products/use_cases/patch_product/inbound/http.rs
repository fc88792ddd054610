use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    response::IntoResponse,
};
use serde_json::Value;

use crate::modules::products::core::validation::{ProductPayload, ValidationError};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    let payload = match body
        .map_err(|_| ValidationError::InvalidBody)
        .and_then(|Json(body)| ProductPayload::from_value(body))
    {
        Ok(payload) => payload,
        Err(err) => {
            // An unknown id wins over an unreadable body.
            state.get_product.handle(&id).await?;
            return Err(err.into());
        }
    };

    let product = state.patch_product.handle(&id, payload).await?;
    Ok(Json(product))
}
