use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::modules::products::core::ports::Upserted;
use crate::modules::products::core::validation::{ProductPayload, ValidationError};
use crate::modules::products::use_cases::create_product::inbound::http::location;
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    let Json(body) = body.map_err(|_| ValidationError::InvalidBody)?;
    let payload = ProductPayload::from_value(body)?;

    let (product, outcome) = state.replace_product.handle(&id, payload).await?;
    Ok(match outcome {
        Upserted::Created => {
            let location = location(&product.id);
            (StatusCode::CREATED, [(axum::http::header::LOCATION, location)], Json(product))
                .into_response()
        }
        Upserted::Updated => (StatusCode::OK, Json(product)).into_response(),
    })
}
