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

use crate::helpers::{body_json, cookies_from, spawn_app, TestApp};
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};

const BOUNDARY: &str = "stockrs-test-boundary";

fn multipart_csv(file_name: &str, content: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: text/csv\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = file_name,
        c = content,
    )
}

async fn upload(app: &TestApp, cookie: &str, body: String) -> Response<Body> {
    app.request(
        Request::builder()
            .method("POST")
            .uri("/upload_csv")
            .header(header::COOKIE, cookie)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// 跟随重定向读取面板，带上闪现Cookie
async fn dashboard_after(app: &TestApp, cookie: &str, response: &Response<Body>) -> serde_json::Value {
    let mut cookies = cookies_from(response);
    cookies.push(cookie.to_string());
    let response = app.get("/dashboard", Some(&cookies.join("; "))).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn import_reports_exact_success_and_failure_counts() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    // 5 rows, 2 malformed: bad quantity and missing fields
    let csv = "\
resistor,10,passive,industrial,filtering
capacitor,many,passive,industrial,decoupling
inductor,3,passive,power,smoothing
diode,2
led,7,active,consumer,indication";

    let response = upload(&app, &cookie, multipart_csv("items.csv", csv)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = dashboard_after(&app, &cookie, &response).await;
    assert_eq!(
        body["flash"],
        "Successfully imported 3 items. 2 items failed."
    );

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let names: Vec<_> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["resistor", "inductor", "led"]);
    assert!(!names.contains(&"capacitor"));
    assert!(!names.contains(&"diode"));
}

#[tokio::test]
async fn surplus_trailing_fields_are_tolerated() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let csv = "sensor,4,active,automotive,measurement,spurious,extra";
    let response = upload(&app, &cookie, multipart_csv("items.csv", csv)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = dashboard_after(&app, &cookie, &response).await;
    assert_eq!(body["flash"], "Successfully imported 1 items. 0 items failed.");
    assert_eq!(body["items"][0]["name"], "sensor");
    assert_eq!(body["items"][0]["quantity"], 4);
}

#[tokio::test]
async fn negative_quantities_never_reach_the_table() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let csv = "ok,1,a,b,c\nbad,-5,a,b,c";
    let response = upload(&app, &cookie, multipart_csv("items.csv", csv)).await;

    let body = dashboard_after(&app, &cookie, &response).await;
    assert_eq!(body["flash"], "Successfully imported 1 items. 1 items failed.");
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_csv_uploads_are_rejected() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = upload(&app, &cookie, multipart_csv("items.txt", "a,1,b,c,d")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = dashboard_after(&app, &cookie, &response).await;
    assert_eq!(body["flash"], "Please upload a CSV file");
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_file_field_is_reported() {
    let app = spawn_app().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let response = upload(&app, &cookie, body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = dashboard_after(&app, &cookie, &response).await;
    assert_eq!(body["flash"], "No file selected");
}
