use axum::{
    Router,
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_http;
use crate::modules::products::use_cases::patch_product::inbound::http as patch_http;
use crate::modules::products::use_cases::replace_product::inbound::http as replace_http;
use crate::shell::api_error::{handle_panic, route_not_found};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/products", get(list_http::handle).post(create_http::handle))
        .route(
            "/products/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .patch(patch_http::handle)
                .delete(delete_http::handle),
        );

    with_boundary(routes).with_state(state)
}

/// Wraps routes with the generic 404 fallback, panic recovery, permissive
/// CORS and request tracing.
pub fn with_boundary(routes: Router<AppState>) -> Router<AppState> {
    routes
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
