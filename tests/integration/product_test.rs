//! Product CRUD tests.

use http::StatusCode;

use crate::helpers::{StubUploader, TestApp, TestFile};

const CREATE_FIELDS: &[(&str, &str)] = &[
    ("name", "Desk Lamp"),
    ("price", "10.99"),
    ("category", "lighting"),
    ("stock", "100"),
];

async fn authed_app() -> (TestApp, String) {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    (app, token)
}

#[tokio::test]
async fn missing_token_gets_the_fixed_401_body() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/products", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        serde_json::json!({"success": false, "message": "No Authorization Token Provided"})
    );
}

#[tokio::test]
async fn invalid_token_is_forbidden_through_the_chain() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/v1/products", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "ForbiddenException");
    assert_eq!(
        response.body["message"],
        "Invalid Authorization Token Provided"
    );
}

#[tokio::test]
async fn create_product_uses_the_uploaded_image_url() {
    let (app, token) = authed_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            CREATE_FIELDS,
            Some(&TestFile::png(1_000)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["status_code"], 201);
    assert_eq!(response.body["message"], "product created successfully");
    let data = &response.body["data"];
    assert_eq!(data["name"], "Desk Lamp");
    assert_eq!(data["price"], 10.99);
    assert_eq!(data["stock"], 100);
    // Round-trip: exactly the URL the image host returned.
    assert_eq!(data["imageUrl"], StubUploader::url_of(1));
    assert!(data.get("deleted").is_none());
    assert!(data.get("deletedAt").is_none());
}

#[tokio::test]
async fn create_product_records_the_owner() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;

    let response = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            CREATE_FIELDS,
            Some(&TestFile::png(1_000)),
            Some(&token),
        )
        .await;

    assert_eq!(response.body["data"]["user"], user.id.to_hex());
}

#[tokio::test]
async fn create_without_name_reports_the_missing_field_first() {
    let (app, token) = authed_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            &[("price", "10.99"), ("category", "C"), ("stock", "100")],
            Some(&TestFile::png(1_000)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "ValidationException");
    let messages = response.body["messages"].as_array().unwrap();
    assert!(messages[0].as_str().unwrap().contains("name is required"));
}

#[tokio::test]
async fn create_with_oversized_image_is_rejected() {
    let (app, token) = authed_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            CREATE_FIELDS,
            Some(&TestFile::png(3_000_000)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response.body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m
                .as_str()
                .unwrap()
                .contains("image size must be less than or equal to 2 MB"))
    );
}

#[tokio::test]
async fn create_with_wrong_mime_type_is_rejected() {
    let (app, token) = authed_app().await;

    let file = TestFile {
        filename: "notes.txt".into(),
        content_type: "text/plain".into(),
        bytes: vec![0u8; 100],
    };
    let response = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            CREATE_FIELDS,
            Some(&file),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("image mimetype must be one of")
    );
}

#[tokio::test]
async fn get_product_by_id() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    let product = app.seed_product("Desk Lamp", user.id).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/products/{}", product.id.to_hex()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "products retrieved successfully");
    assert_eq!(response.body["data"]["name"], "Desk Lamp");
}

#[tokio::test]
async fn malformed_id_gets_the_fixed_invalid_id_body() {
    let (app, token) = authed_app().await;

    let response = app
        .request("GET", "/api/v1/products/not-an-id", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        serde_json::json!({
            "status_code": 400,
            "success": false,
            "error": "Invalid ID",
            "message": "The provided ID is invalid.",
        })
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (app, token) = authed_app().await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/products/{}", bson::oid::ObjectId::new().to_hex()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NotFoundException");
    assert_eq!(response.body["message"], "product does not exist");
}

#[tokio::test]
async fn update_requires_at_least_one_field() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    let product = app.seed_product("Desk Lamp", user.id).await;

    let response = app
        .multipart_request(
            "PUT",
            &format!("/api/v1/products/{}", product.id.to_hex()),
            &[],
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("must contain at least one of")
    );
}

#[tokio::test]
async fn update_changes_only_the_sent_fields() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    let product = app.seed_product("Desk Lamp", user.id).await;

    let response = app
        .multipart_request(
            "PUT",
            &format!("/api/v1/products/{}", product.id.to_hex()),
            &[("price", "15.5")],
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "products updated successfully");
    assert_eq!(response.body["data"]["price"], 15.5);
    assert_eq!(response.body["data"]["name"], "Desk Lamp");
    assert_eq!(response.body["data"]["imageUrl"], product.image_url);
}

#[tokio::test]
async fn update_with_image_replaces_the_url() {
    let (app, token) = authed_app().await;

    let created = app
        .multipart_request(
            "POST",
            "/api/v1/products",
            CREATE_FIELDS,
            Some(&TestFile::png(1_000)),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created.body["data"]["imageUrl"], StubUploader::url_of(1));

    let updated = app
        .multipart_request(
            "PUT",
            &format!("/api/v1/products/{id}"),
            &[],
            Some(&TestFile::png(2_000)),
            Some(&token),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["imageUrl"], StubUploader::url_of(2));
}

#[tokio::test]
async fn delete_soft_deletes_and_returns_the_record() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    let product = app.seed_product("Desk Lamp", user.id).await;
    let path = format!("/api/v1/products/{}", product.id.to_hex());

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "products deleted successfully");
    assert_eq!(response.body["data"]["name"], "Desk Lamp");

    // Gone from ordinary lookups...
    let after = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::NOT_FOUND);

    // ...but retrievable through the deleted-only path, flagged deleted.
    use mercato_database::repositories::ProductRepository;
    let deleted = app
        .products
        .find_deleted_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());
}

#[tokio::test]
async fn search_narrows_the_listing() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    app.seed_product("Red Lamp", user.id).await;
    app.seed_product("Blue Chair", user.id).await;

    let response = app
        .request("GET", "/api/v1/products?q=lamp", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"]["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Red Lamp");
    assert_eq!(response.body["data"]["total"], 1);
}
