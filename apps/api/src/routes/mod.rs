pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume pipeline API
        .route("/api/v1/resumes/normalize", post(handlers::handle_normalize))
        .route("/api/v1/resumes/validate", post(handlers::handle_validate))
        .route("/api/v1/resumes/render", post(handlers::handle_render))
        .route(
            "/api/v1/resumes/render/pdf",
            post(handlers::handle_render_pdf),
        )
        .with_state(state)
}
