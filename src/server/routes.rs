use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{self, AppState};

/// Create the API router
pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/generate-plan", post(handlers::generate_plan))
        .route("/insights", post(handlers::insights))
        .with_state(state);

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .allow_origin(Any);
        router = router.layer(cors);
    }

    router
}
