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

use crate::helpers::{body_json, cookies_from, form, spawn_app, TestApp};
use axum::{
    body::Body,
    http::{header, Response, StatusCode},
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 测试环境里Mock服务器监听回环地址
fn allow_loopback_targets() {
    std::env::set_var("STOCKRS_DISABLE_SSRF_PROTECTION", "true");
}

async fn crawl(app: &TestApp, cookie: &str, url: &str) -> Response<Body> {
    app.post_form("/crawl", form(&[("url", url)]), Some(cookie)).await
}

async fn history_after(
    app: &TestApp,
    cookie: &str,
    response: &Response<Body>,
) -> serde_json::Value {
    let mut cookies = cookies_from(response);
    cookies.push(cookie.to_string());
    let response = app.get("/crawl_history", Some(&cookies.join("; "))).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn successful_crawl_appends_a_completed_record() {
    allow_loopback_targets();
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(
                    r#"<html><body><nav><a href="/home">Home</a></nav>
                       <p>Fresh inventory news.</p>
                       <a href="/next">Next page</a>
                       <script>track();</script></body></html>"#,
                ),
        )
        .mount(&server)
        .await;

    let target = format!("{}/article", server.uri());
    let response = crawl(&app, &cookie, &target).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/crawl_history"
    );

    let body = history_after(&app, &cookie, &response).await;
    assert_eq!(body["flash"], "Website crawled successfully!");
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "completed");
    assert_eq!(records[0]["url"], target);

    // Full payload on the details page
    let id = records[0]["id"].as_i64().unwrap();
    let response = app
        .get(&format!("/crawl-details/{}", id), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let record = body_json(response).await;
    let payload = &record["crawl_data"];
    assert_eq!(payload["status_code"], 200);
    assert!(payload["text"]
        .as_str()
        .unwrap()
        .contains("Fresh inventory news."));
    assert!(!payload["text"].as_str().unwrap().contains("track()"));
    let links = payload["links"].as_array().unwrap();
    assert!(links
        .iter()
        .any(|l| l.as_str().unwrap().ends_with("/next")));
}

#[tokio::test]
async fn failed_crawl_appends_a_failed_record() {
    allow_loopback_targets();
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    // Nothing listens on port 9; the single attempt fails fast
    let response = crawl(&app, &cookie, "http://127.0.0.1:9/unreachable").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = history_after(&app, &cookie, &response).await;
    assert!(body["flash"]
        .as_str()
        .unwrap()
        .starts_with("Error crawling website:"));
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "failed");

    let id = records[0]["id"].as_i64().unwrap();
    let response = app
        .get(&format!("/crawl-details/{}", id), Some(&cookie))
        .await;
    let record = body_json(response).await;
    assert!(record["crawl_data"]["error"].as_str().is_some());
}

#[tokio::test]
async fn unparseable_urls_leave_no_record() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = crawl(&app, &cookie, "definitely not a url").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = history_after(&app, &cookie, &response).await;
    assert!(body["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn crawl_details_are_owner_scoped() {
    allow_loopback_targets();
    let app = spawn_app().await;
    let alice = app.register_and_login("alice", "pw1", "a@x.com").await;
    let bob = app.register_and_login("bob", "pw2", "b@x.com").await;

    let response = crawl(&app, &alice, "http://127.0.0.1:9/unreachable").await;
    let body = history_after(&app, &alice, &response).await;
    let id = body["records"][0]["id"].as_i64().unwrap();

    // Bob is bounced back to his own (empty) history
    let response = app.get(&format!("/crawl-details/{}", id), Some(&bob)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/crawl_history"
    );

    let body = history_after(&app, &bob, &response).await;
    assert_eq!(body["flash"], "Crawl not found");
    assert!(body["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn history_lists_newest_first() {
    allow_loopback_targets();
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    crawl(&app, &cookie, "http://127.0.0.1:9/first").await;
    let response = crawl(&app, &cookie, "http://127.0.0.1:9/second").await;

    let body = history_after(&app, &cookie, &response).await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["url"], "http://127.0.0.1:9/second");
    assert_eq!(records[1]["url"], "http://127.0.0.1:9/first");
}
