//! Pagination contract tests over the listing endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

async fn app_with_products(count: usize) -> (TestApp, String) {
    let app = TestApp::new();
    let user = app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;
    for n in 1..=count {
        app.seed_product(&format!("Product {n}"), user.id).await;
    }
    (app, token)
}

#[tokio::test]
async fn defaults_to_page_one_of_ten() {
    let (app, token) = app_with_products(23).await;

    let response = app.request("GET", "/api/v1/products", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "products retrieved successfully");
    let data = &response.body["data"];
    assert_eq!(data["count"], 10);
    assert_eq!(data["total"], 23);
    assert_eq!(data["totalPages"], 3);
    assert_eq!(data["currentPage"], 1);
    assert_eq!(data["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn newest_products_come_first() {
    let (app, token) = app_with_products(12).await;

    let response = app.request("GET", "/api/v1/products", None, Some(&token)).await;

    let first = &response.body["data"]["data"][0];
    assert_eq!(first["name"], "Product 12");
}

#[tokio::test]
async fn last_page_count_reflects_the_remainder() {
    let (app, token) = app_with_products(23).await;

    let response = app
        .request("GET", "/api/v1/products?page=3", None, Some(&token))
        .await;

    let data = &response.body["data"];
    assert_eq!(data["count"], 3);
    assert_eq!(data["currentPage"], 3);
    assert_eq!(data["total"], 23);
}

#[tokio::test]
async fn beyond_the_last_page_is_empty_with_accurate_totals() {
    let (app, token) = app_with_products(23).await;

    let response = app
        .request("GET", "/api/v1/products?page=9", None, Some(&token))
        .await;

    let data = &response.body["data"];
    assert_eq!(data["count"], 0);
    assert_eq!(data["data"].as_array().unwrap().len(), 0);
    assert_eq!(data["total"], 23);
    assert_eq!(data["totalPages"], 3);
    assert_eq!(data["currentPage"], 9);
}

#[tokio::test]
async fn count_never_exceeds_the_limit() {
    let (app, token) = app_with_products(23).await;

    for page in 1..=4 {
        let response = app
            .request(
                "GET",
                &format!("/api/v1/products?page={page}&limit=7"),
                None,
                Some(&token),
            )
            .await;
        let data = &response.body["data"];
        let count = data["count"].as_u64().unwrap();
        assert!(count <= 7);
        let expected = if page < 4 { 7 } else { 2 };
        assert_eq!(count, expected);
        assert_eq!(data["totalPages"], 4);
    }
}

#[tokio::test]
async fn empty_collection_still_reports_one_page() {
    let app = TestApp::new();
    app.create_test_user("user1@gmail.com", "password").await;
    let token = app.login("user1@gmail.com", "password").await;

    let response = app.request("GET", "/api/v1/products", None, Some(&token)).await;

    let data = &response.body["data"];
    assert_eq!(data["count"], 0);
    assert_eq!(data["total"], 0);
    assert_eq!(data["totalPages"], 1);
}

#[tokio::test]
async fn out_of_range_parameters_fall_back() {
    let (app, token) = app_with_products(5).await;

    let response = app
        .request(
            "GET",
            "/api/v1/products?page=0&limit=abc",
            None,
            Some(&token),
        )
        .await;

    let data = &response.body["data"];
    assert_eq!(data["currentPage"], 1);
    assert_eq!(data["count"], 5);
}

#[tokio::test]
async fn soft_deleted_products_leave_the_listing() {
    let (app, token) = app_with_products(11).await;

    use mercato_database::repositories::ProductRepository;
    let page = app
        .products
        .paginate(&Default::default(), &Default::default())
        .await
        .unwrap();
    app.products.soft_delete(page.data[0].id).await.unwrap();

    let response = app.request("GET", "/api/v1/products", None, Some(&token)).await;
    let data = &response.body["data"];
    assert_eq!(data["total"], 10);
    assert_eq!(data["totalPages"], 1);
}
