// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::helpers::{body_json, body_text, cookies_from, spawn_app};
use axum::http::{header, StatusCode};

#[tokio::test]
async fn register_then_login_establishes_a_session() {
    let app = spawn_app().await;

    let response = app.register("alice", "pw1", "a@x.com").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    let cookie = app.login("alice", "pw1").await.expect("session cookie");

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn duplicate_username_fails_the_second_registration() {
    let app = spawn_app().await;

    let first = app.register("alice", "pw1", "a@x.com").await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(first.headers().get(header::LOCATION).unwrap(), "/login");

    let second = app.register("alice", "pw2", "other@x.com").await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.headers().get(header::LOCATION).unwrap(), "/register");

    // The one-shot flash carries the reason
    let cookies = cookies_from(&second).join("; ");
    let response = app.get("/login", Some(&cookies)).await;
    let body = body_json(response).await;
    assert_eq!(body["flash"], "Username already exists");
}

#[tokio::test]
async fn duplicate_email_fails_the_second_registration() {
    let app = spawn_app().await;

    app.register("alice", "pw1", "a@x.com").await;
    let second = app.register("bob", "pw2", "a@x.com").await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.headers().get(header::LOCATION).unwrap(), "/register");

    let cookies = cookies_from(&second).join("; ");
    let response = app.get("/login", Some(&cookies)).await;
    let body = body_json(response).await;
    assert_eq!(body["flash"], "Email already registered");
}

#[tokio::test]
async fn invalid_email_is_rejected_at_registration() {
    let app = spawn_app().await;

    let response = app.register("alice", "pw1", "not-an-email").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/register");
}

#[tokio::test]
async fn wrong_password_never_establishes_a_session() {
    let app = spawn_app().await;

    app.register("alice", "pw1", "a@x.com").await;
    assert!(app.login("alice", "wrong").await.is_none());
}

#[tokio::test]
async fn unknown_username_never_establishes_a_session() {
    let app = spawn_app().await;

    assert!(app.login("nobody", "pw1").await.is_none());
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let app = spawn_app().await;

    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    // Removal cookie blanks the session
    assert!(cookies_from(&response)
        .iter()
        .any(|c| c == "session=" || c.starts_with("session=;")));
}

#[tokio::test]
async fn landing_redirects_when_a_session_exists() {
    let app = spawn_app().await;

    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = app.get("/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard"
    );

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "stockrs");
}

#[tokio::test]
async fn profile_shows_the_account_without_the_password_hash() {
    let app = spawn_app().await;

    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = app.get("/profile", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("alice"));
    assert!(text.contains("a@x.com"));
    assert!(!text.contains("password"));
    assert!(!text.contains("argon2"));
}
