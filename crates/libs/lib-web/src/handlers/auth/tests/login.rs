//! # Login Tests

use super::*;
use axum::http::StatusCode;
use lib_auth::decode_jwt;
use lib_core::dto::{LoginRequest, SignupRequest, TokenResponse, UserInfo};
use serde_json::Value;
use tower::ServiceExt;

async fn signup_user(app: &axum::Router, username: &str, password: &str) -> UserInfo {
    let req = SignupRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = app
        .clone()
        .oneshot(post_json("/signup", &req))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_login_success_and_token_identifies_user() {
    let app = test_app().await;
    let user = signup_user(&app, "alice", "TestPassword123!").await;

    let req = LoginRequest {
        username: "alice".to_string(),
        password: "TestPassword123!".to_string(),
    };

    let response = app.oneshot(post_json("/login", &req)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let token_res: TokenResponse = body_json(response).await;
    assert!(!token_res.token.is_empty());

    // The token must verify back to the created user's id
    let claims = decode_jwt(&token_res.token, &test_config().jwt_secret)
        .expect("issued token should verify");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app().await;
    signup_user(&app, "alice", "TestPassword123!").await;

    let req = LoginRequest {
        username: "alice".to_string(),
        password: "WrongPassword!".to_string(),
    };

    let response = app.oneshot(post_json("/login", &req)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = body_json(response).await;
    assert_eq!(body["code"], "InvalidCredentials");
}

#[tokio::test]
async fn test_login_unknown_user_fails_identically() {
    let app = test_app().await;
    signup_user(&app, "alice", "TestPassword123!").await;

    let wrong_password = LoginRequest {
        username: "alice".to_string(),
        password: "WrongPassword!".to_string(),
    };
    let unknown_user = LoginRequest {
        username: "mallory".to_string(),
        password: "WrongPassword!".to_string(),
    };

    let res_a = app
        .clone()
        .oneshot(post_json("/login", &wrong_password))
        .await
        .unwrap();
    let res_b = app.oneshot(post_json("/login", &unknown_user)).await.unwrap();

    // Same status, same body: no username enumeration
    assert_eq!(res_a.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res_b.status(), StatusCode::UNAUTHORIZED);

    let body_a: Value = body_json(res_a).await;
    let body_b: Value = body_json(res_b).await;
    assert_eq!(body_a, body_b);
}
