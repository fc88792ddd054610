use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    state.delete_product.handle(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
