mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("nicola", "nicola@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // The raw password is never echoed and no hash leaves the system
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register("nicola", "nicola@example.com", "pass_word!").await;

    let response = app.register("nicola", "other@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Username already exists"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("nicola", "nicola@example.com", "pass_word!").await;

    let response = app.register("nicola2", "nicola@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Email already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("nicola", "not-an-email", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration_exactly_one_wins() {
    let app = TestApp::spawn().await;

    let (first, second) = tokio::join!(
        app.register("nicola", "one@example.com", "pass_word!"),
        app.register("nicola", "two@example.com", "pass_word!"),
    );

    let statuses = [first.status(), second.status()];
    assert!(statuses.contains(&StatusCode::CREATED));
    assert!(statuses.contains(&StatusCode::CONFLICT));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "username": "nicola", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("nicola", "nicola@example.com", "pass_word!").await;

    let wrong_password = app
        .post("/auth/login")
        .json(&json!({ "username": "nicola", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_username = app
        .post("/auth/login")
        .json(&json!({ "username": "nobody", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_username.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: no username enumeration through error detail
    let first = wrong_password.text().await.expect("Failed to read body");
    let second = unknown_username.text().await.expect("Failed to read body");
    assert_eq!(first, second);
    assert!(first.contains("Invalid credentials"));
}

#[tokio::test]
async fn test_protected_route_without_token_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/data")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbled_header_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/data")
        .header("Authorization", "NotBearer zzz")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_failures_share_one_generic_message() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("nicola", "nicola@example.com", "pass_word!").await;

    // Tamper with the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let missing = app.get("/api/data").send().await.unwrap();
    let invalid = app.get_authenticated("/api/data", &tampered).send().await.unwrap();
    let expired = app
        .get_authenticated("/api/data", &app.issue_expired_token("nicola"))
        .send()
        .await
        .unwrap();

    for response in [missing, invalid, expired] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        // Generic classification only; no parse detail leaks to the caller
        assert_eq!(body["data"]["message"], "Invalid or expired token");
    }
}

#[tokio::test]
async fn test_get_data_with_valid_token() {
    let app = TestApp::spawn().await;

    let token = app.register_and_login("nicola", "nicola@example.com", "pass_word!").await;
    app.register("marta", "marta@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/data", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["current_user"], "nicola");
    assert_eq!(body["data"]["count"], 2);
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::spawn().await;

    let token = app.register_and_login("nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_create_message_sanitizes_and_escapes() {
    let app = TestApp::spawn().await;

    let token = app.register_and_login("nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/message", &token)
        .json(&json!({ "message": "<script>alert(1)</script>hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"], "nicola");
    assert_eq!(body["data"]["sanitized_message"], "hello");
    assert_eq!(
        body["data"]["escaped_message"],
        "&lt;script&gt;alert(1)&lt;&#x2F;script&gt;hello"
    );
    // The raw message is never echoed back
    assert!(body["data"].get("original_message").is_none());
}

#[tokio::test]
async fn test_create_message_empty_rejected() {
    let app = TestApp::spawn().await;

    let token = app.register_and_login("nicola", "nicola@example.com", "pass_word!").await;

    let response = app
        .post_authenticated("/api/message", &token)
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Message cannot be empty");
}
