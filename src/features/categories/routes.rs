use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/category",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/category/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::{body::Bytes, http::StatusCode};
    use fake::{faker::lorem::en::Word, Fake};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_list_is_empty_array_without_rows() {
        let server = test_server();

        let response = server.get("/category").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_create_returns_created_row() {
        let server = test_server();
        let name: String = Word().fake();

        let response = server
            .post("/category")
            .json(&json!({ "name": name, "is_active": true }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert!(body["id"].as_i64().is_some());
        assert_eq!(body["name"], json!(name));
        assert_eq!(body["is_active"], json!(true));
        assert!(body["created_at"].is_string());

        let list: Value = server.get("/category").await.json();
        assert_eq!(list.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_create_without_is_active_is_rejected() {
        let server = test_server();

        let response = server
            .post("/category")
            .json(&json!({ "name": "Backend" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["message"], json!("The given data was invalid."));
        assert_eq!(
            body["errors"]["is_active"],
            json!(["The is active field is required."])
        );
        assert!(body["errors"].get("name").is_none());
    }

    #[tokio::test]
    async fn test_create_with_overlong_name_is_rejected() {
        let server = test_server();

        let response = server
            .post("/category")
            .json(&json!({ "name": "n".repeat(256), "is_active": true }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert!(body["errors"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_create_with_wrong_type_is_rejected() {
        let server = test_server();

        let response = server
            .post("/category")
            .json(&json!({ "name": 123, "is_active": "maybe" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(
            body["errors"]["name"],
            json!(["The name field must be a string."])
        );
        assert_eq!(
            body["errors"]["is_active"],
            json!(["The is active field must be true or false."])
        );
        assert!(body["errors"].get("body").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = test_server();

        let response = server
            .post("/category")
            .bytes(Bytes::from_static(b"{\"name\": "))
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_partial_update_keeps_absent_fields() {
        let server = test_server();
        let created: Value = server
            .post("/category")
            .json(&json!({ "name": "Backend", "is_active": true }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/category/{}", id))
            .json(&json!({ "is_active": false }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["name"], json!("Backend"));
        assert_eq!(body["is_active"], json!(false));
    }

    #[tokio::test]
    async fn test_update_validates_supplied_name() {
        let server = test_server();
        let created: Value = server
            .post("/category")
            .json(&json!({ "name": "Backend", "is_active": true }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/category/{}", id))
            .json(&json!({ "name": "" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert!(body["errors"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_id_are_not_found() {
        let server = test_server();

        server
            .put("/category/99999")
            .json(&json!({ "name": "Backend" }))
            .await
            .assert_status_not_found();

        let response = server.delete("/category/99999").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["message"], json!("Category 99999 not found"));
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_invalid_body() {
        let server = test_server();

        server
            .put("/category/99999")
            .json(&json!({ "name": "" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_unreadable_body() {
        let server = test_server();

        server
            .put("/category/99999")
            .json(&json!({ "is_active": "yes" }))
            .await
            .assert_status_not_found();

        let response = server.put("/category/99999").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["message"], json!("Category 99999 not found"));
    }

    #[tokio::test]
    async fn test_update_existing_id_without_body_is_bad_request() {
        let server = test_server();
        let created: Value = server
            .post("/category")
            .json(&json!({ "name": "Backend", "is_active": true }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        server
            .put(&format!("/category/{}", id))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found_json() {
        let server = test_server();

        let response = server.delete("/category/abc").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["message"].is_string());

        server
            .put("/category/abc")
            .json(&json!({ "name": "Backend" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let server = test_server();
        let created: Value = server
            .post("/category")
            .json(&json!({ "name": "Backend", "is_active": true }))
            .await
            .json();
        let id = created["id"].as_i64().unwrap();

        let response = server.delete(&format!("/category/{}", id)).await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());

        server.get("/category").await.assert_json(&json!([]));
    }
}
