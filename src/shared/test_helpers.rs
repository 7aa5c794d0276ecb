use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use crate::features::categories::{
    routes as categories_routes, CategoryRepository, CategoryService,
};
use crate::features::interviews::{
    routes as interviews_routes, InterviewRepository, InterviewService,
};
use crate::shared::fake_store::FakeStore;

/// Both feature routers wired to one shared in-memory store
pub fn test_router() -> Router {
    let store = Arc::new(FakeStore::new());
    let categories: Arc<dyn CategoryRepository> = store.clone();
    let interviews: Arc<dyn InterviewRepository> = store;

    let category_service = Arc::new(CategoryService::new(Arc::clone(&categories)));
    let interview_service = Arc::new(InterviewService::new(interviews, categories));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(interviews_routes::routes(interview_service))
}

pub fn test_server() -> TestServer {
    TestServer::new(test_router()).expect("failed to start test server")
}
