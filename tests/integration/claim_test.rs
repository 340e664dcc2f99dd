//! Integration tests for the public claim endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");

    let response = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["store"], "memory");
    assert_eq!(response.body["data"]["storeHealthy"], true);
}

#[tokio::test]
async fn test_first_claim_gets_first_default_coupon() {
    let app = helpers::TestApp::new().await;

    let response = app.claim("203.0.113.1", "fp-one").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(
        response.body["message"],
        "Congratulations! Your coupon code is: WELCOME10"
    );
    assert_eq!(response.body["coupon"]["code"], "WELCOME10");
    assert_eq!(response.body["coupon"]["isRedeemed"], true);
    assert_eq!(response.body["coupon"]["redeemedBy"]["ip"], "203.0.113.1");
    assert!(response.body.get("hoursRemaining").is_none());
}

#[tokio::test]
async fn test_repeat_claim_hits_cooldown() {
    let app = helpers::TestApp::new().await;
    app.claim("203.0.113.1", "fp-one").await;

    let same_ip = app.claim("203.0.113.1", "fp-other").await;
    assert_eq!(same_ip.status, StatusCode::OK);
    assert_eq!(same_ip.body["success"], false);
    assert_eq!(same_ip.body["hoursRemaining"], 24);
    assert_eq!(
        same_ip.body["message"],
        "You've already claimed a coupon. Please try again in 24 hours."
    );

    let same_fingerprint = app.claim("198.51.100.9", "fp-one").await;
    assert_eq!(same_fingerprint.body["success"], false);
    assert_eq!(same_fingerprint.body["hoursRemaining"], 24);
}

#[tokio::test]
async fn test_pool_exhaustion() {
    let app = helpers::TestApp::new().await;

    for (i, code) in ["WELCOME10", "SPRING25", "FREESHIP"].iter().enumerate() {
        let response = app
            .claim(&format!("203.0.113.{i}"), &format!("fp-{i}"))
            .await;
        assert_eq!(response.body["coupon"]["code"], *code);
    }

    let response = app.claim("203.0.113.99", "fp-99").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "No coupons available at this time.");
    assert_eq!(app.store.load_claims().await.expect("claims").len(), 3);
}

#[tokio::test]
async fn test_fingerprint_derived_from_environment() {
    let app = helpers::TestApp::new().await;
    let body = serde_json::json!({
        "environment": {
            "userAgent": "Mozilla/5.0",
            "screenWidth": 1920,
            "screenHeight": 1080,
            "colorDepth": 24,
            "timezone": "Europe/Berlin"
        }
    });

    let response = app.request("POST", "/api/claims", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let claims = app.store.load_claims().await.expect("claims");
    assert_eq!(claims.len(), 1);
    assert!(!claims[0].identity.fingerprint.is_empty());
    assert_eq!(claims[0].identity.address, "unknown");
}

#[tokio::test]
async fn test_oversized_fingerprint_rejected() {
    let app = helpers::TestApp::new().await;
    let response = app.claim("203.0.113.1", &"x".repeat(300)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_concurrent_claims_never_share_a_coupon() {
    let app = helpers::TestApp::new().await;

    let attempts = (0..6).map(|i| {
        let ip = format!("192.0.2.{i}");
        let fp = format!("concurrent-{i}");
        let app = &app;
        async move { app.claim(&ip, &fp).await }
    });
    let responses = futures::future::join_all(attempts).await;

    let mut codes: Vec<String> = responses
        .iter()
        .filter_map(|r| r.body["coupon"]["code"].as_str().map(String::from))
        .collect();
    assert_eq!(codes.len(), 3);
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 3);
}

#[tokio::test]
async fn test_forged_forwarding_headers_ignored_by_default() {
    let app = helpers::TestApp::with_config(|_| {}).await;
    let peer = "203.0.113.50:51000".parse().expect("peer");

    let first = app.claim_from_peer(peer, "1.1.1.1", "fp-first").await;
    assert_eq!(first.body["success"], true);
    assert_eq!(first.body["coupon"]["redeemedBy"]["ip"], "203.0.113.50");

    let second = app.claim_from_peer(peer, "2.2.2.2", "fp-second").await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["success"], false);
    assert_eq!(second.body["hoursRemaining"], 24);
    assert_eq!(app.store.load_claims().await.expect("claims").len(), 1);
}

#[tokio::test]
async fn test_trusted_forwarding_headers_name_the_client() {
    let app = helpers::TestApp::new().await;
    let proxy = "10.0.0.2:443".parse().expect("proxy");

    let first = app.claim_from_peer(proxy, "1.1.1.1", "fp-first").await;
    assert_eq!(first.body["coupon"]["redeemedBy"]["ip"], "1.1.1.1");

    let second = app.claim_from_peer(proxy, "2.2.2.2", "fp-second").await;
    assert_eq!(second.body["success"], true);
    assert_eq!(second.body["coupon"]["redeemedBy"]["ip"], "2.2.2.2");
}
