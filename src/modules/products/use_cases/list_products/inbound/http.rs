use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::products::use_cases::list_products::handler::ListProducts;
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<ListProducts>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|_| ApiError::InvalidQuery)?;
    let products = state.list_products.handle(query).await?;
    Ok(Json(products))
}
