pub mod registration;

use crate::{AppState, middleware::logger::logger};
use axum::{
    Router,
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server().cors_origins);

    Router::new()
        .route(
            "/register",
            get(registration::registration_form).post(registration::register),
        )
        .route("/register/async", post(registration::register_async))
        .route("/register/json", post(registration::register_json))
        .with_state(state)
        .layer(cors)
        .layer(from_fn(logger))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    layer.allow_origin(origins)
}
