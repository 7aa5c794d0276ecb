use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::interviews::handlers;
use crate::features::interviews::services::InterviewService;

/// Create routes for the interviews feature
pub fn routes(service: Arc<InterviewService>) -> Router {
    Router::new()
        .route(
            "/interview",
            get(handlers::list_interviews).post(handlers::create_interview),
        )
        .route(
            "/interview/{id}",
            put(handlers::update_interview).delete(handlers::delete_interview),
        )
        .with_state(service)
}
