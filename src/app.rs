use axum::{
  http::{header, Method},
  Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::registration::rest::registration_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .nest("/api", registration_routes())
    .layer(cors_layer())
    .with_state(state)
}

/// Any origin may POST JSON. Preflight requests are answered here with 200.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE])
}
