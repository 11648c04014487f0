mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{Router, middleware as axum_middleware, routing::post};

pub use state::HttpState;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/usage_summary", post(handlers::usage_summary))
        .route("/usage_daily", post(handlers::usage_daily))
        .route("/egress_daily", post(handlers::egress_daily))
        .route("/capacity", post(handlers::capacity))
        .route("/invoice", post(handlers::invoice))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_run_token,
        ));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::service_info)
        .with_state(state)
}
