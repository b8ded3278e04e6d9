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

use crate::helpers::{body_json, cookies_from, form, spawn_app};
use axum::http::{header, StatusCode};

/// 端到端场景
///
/// 注册alice → 登录 → 添加widget → 面板恰好显示一条widget数量5
#[tokio::test]
async fn register_login_add_item_shows_up_on_the_dashboard() {
    let app = spawn_app().await;

    // Register
    let response = app.register("alice", "pw1", "a@x.com").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    // Login
    let cookie = app.login("alice", "pw1").await.expect("session established");

    // Add the widget
    let response = app
        .post_form(
            "/add",
            form(&[
                ("name", "widget"),
                ("quantity", "5"),
                ("category", "cat"),
                ("sector", "sec"),
                ("application", "app"),
            ]),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard"
    );

    // Dashboard lists exactly one item named widget with quantity 5
    let mut cookies = cookies_from(&response);
    cookies.push(cookie.clone());
    let response = app.get("/dashboard", Some(&cookies.join("; "))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["flash"], "Item successfully added!");

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "widget");
    assert_eq!(items[0]["quantity"], 5);
    assert_eq!(items[0]["category"], "cat");
    assert_eq!(items[0]["sector"], "sec");
    assert_eq!(items[0]["application"], "app");
}
