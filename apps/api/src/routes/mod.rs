pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job requirements
        .route("/api/v1/jobs", post(handlers::handle_create_job))
        // Resumes
        .route("/api/v1/resumes", post(handlers::handle_create_resumes))
        .route(
            "/api/v1/resumes/upload",
            post(handlers::handle_upload_resumes),
        )
        .route("/api/v1/resumes/:id", get(handlers::handle_get_resume))
        // Screening
        .route("/api/v1/screen", post(handlers::handle_screen))
        .route("/api/v1/dashboard", get(handlers::handle_dashboard))
        .route(
            "/api/v1/session/clear",
            post(handlers::handle_clear_session),
        )
        .with_state(state)
}
