//! Integration tests for the admin API.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(serde_json::json!({
                "username": helpers::ADMIN_USER,
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/admin/coupons", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/admin/stats", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_returns_expiry() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(serde_json::json!({
                "username": helpers::ADMIN_USER,
                "password": helpers::ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["expiresAt"].is_string());
}

#[tokio::test]
async fn test_coupon_lifecycle() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/admin/coupons", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(3));

    let response = app
        .request(
            "POST",
            "/api/admin/coupons",
            Some(serde_json::json!({
                "code": "SUMMER5",
                "description": "5% off summer items",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["isActive"], true);
    let id = response.body["data"]["id"]
        .as_str()
        .expect("coupon id")
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/coupons/{id}"),
            Some(serde_json::json!({ "description": "7% off summer items" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["code"], "SUMMER5");
    assert_eq!(response.body["data"]["description"], "7% off summer items");

    let response = app
        .request(
            "POST",
            &format!("/api/admin/coupons/{id}/toggle"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isActive"], false);

    let response = app
        .request("GET", &format!("/api/admin/coupons/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isActive"], false);
}

#[tokio::test]
async fn test_create_validation_and_unknown_ids() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/admin/coupons",
            Some(serde_json::json!({ "code": "", "description": "x" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/admin/coupons",
            Some(serde_json::json!({ "code": "   ", "description": "x" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let missing = "00000000-0000-4000-8000-000000000000";
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/coupons/{missing}"),
            Some(serde_json::json!({ "isActive": false })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            &format!("/api/admin/coupons/{missing}/toggle"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deactivation_skips_coupon_and_redeemed_toggle_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let coupons = app.store.load_coupons().await.expect("coupons");
    let (first, second) = (coupons[0].id, coupons[1].id);

    let response = app
        .request(
            "POST",
            &format!("/api/admin/coupons/{first}/toggle"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let claimed = app.claim("203.0.113.5", "fp-5").await;
    assert_eq!(claimed.body["coupon"]["code"], "SPRING25");

    let response = app
        .request(
            "POST",
            &format!("/api/admin/coupons/{second}/toggle"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_claim_history_and_stats() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    app.claim("203.0.113.1", "fp-1").await;
    app.claim("203.0.113.2", "fp-2").await;

    let response = app
        .request("GET", "/api/admin/claims", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let history = response.body["data"].as_array().expect("claims").clone();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["couponCode"], "SPRING25");
    assert_eq!(history[0]["userInfo"]["ip"], "203.0.113.2");
    assert_eq!(history[1]["couponCode"], "WELCOME10");

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"],
        serde_json::json!({
            "total": 3,
            "available": 1,
            "redeemed": 2,
            "inactive": 0,
            "claims": 2,
        })
    );
}

#[tokio::test]
async fn test_malformed_coupon_id_returns_json_error() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    for (method, path) in [
        ("GET", "/api/admin/coupons/not-a-uuid"),
        ("POST", "/api/admin/coupons/not-a-uuid/toggle"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{method} {path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert!(response.body["message"].is_string());
    }
}
