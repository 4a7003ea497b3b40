//! Authentication flow tests.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn login_success_wraps_user_and_token() {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::json!({"email": "user1@gmail.com", "password": "password"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status_code"], 200);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Login successful");
    assert_eq!(response.body["data"]["user"]["email"], "user1@gmail.com");
    assert!(!response.body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_response_never_leaks_internal_fields() {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::json!({"email": "user1@gmail.com", "password": "password"})),
            None,
        )
        .await;

    let user = response.body["data"]["user"].as_object().unwrap();
    assert!(user.get("password").is_none());
    assert!(user.get("deleted").is_none());
    assert!(user.get("deletedAt").is_none());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::json!({"email": "user1@gmail.com", "password": "nope"})),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::json!({"email": "ghost@gmail.com", "password": "password"})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["error"], "HttpException");
    assert_eq!(wrong_password.body["message"], "Invalid Email or Password");
    assert_eq!(wrong_password.body["success"], false);
}

#[tokio::test]
async fn login_with_empty_body_is_a_validation_failure() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/auth", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "ValidationException");
    assert_eq!(
        response.body["messages"],
        serde_json::json!(["email is required", "password is required"])
    );
}

#[tokio::test]
async fn malformed_json_body_is_a_bad_request_in_the_envelope() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::Value::String("not-an-object".into())),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "BadRequestException");
}

#[tokio::test]
async fn soft_deleted_user_cannot_login_but_remains_retrievable() {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;

    use mercato_database::repositories::UserRepository;
    app.users.soft_delete(user.id).await.unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth",
            Some(serde_json::json!({"email": "user1@gmail.com", "password": "password"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid Email or Password");

    assert!(app.users.find_by_id(user.id).await.unwrap().is_none());
    let deleted = app.users.find_deleted_by_id(user.id).await.unwrap().unwrap();
    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());
}

#[tokio::test]
async fn duplicate_email_surfaces_as_a_409_duplicate_key() {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;

    use mercato_database::repositories::UserRepository;
    let err = app
        .users
        .insert(mercato_entity::user::CreateUser {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "user1@gmail.com".into(),
            password: "hash".into(),
        })
        .await
        .unwrap_err();

    // The chain turns the store failure into the uniform 409 envelope.
    let response = mercato_api::error::dispatch(&err);
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status_code"], 409);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Duplicate key");
    assert!(body["message"].as_str().unwrap().contains("E11000"));
}
