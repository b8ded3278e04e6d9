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

use crate::helpers::{body_json, cookies_from, form, spawn_app_with, test_settings, TestApp};
use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_ID: &str = "dQw4w9WgXcQ";

async fn spawn_with_oembed() -> (TestApp, MockServer) {
    let server = MockServer::start().await;
    let mut settings = test_settings();
    settings.youtube.oembed_url = format!("{}/oembed", server.uri());
    (spawn_app_with(settings).await, server)
}

async fn mount_oembed(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param(
            "url",
            format!("https://www.youtube.com/watch?v={}", VIDEO_ID).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Classic video",
            "author_name": "Classic channel",
            "thumbnail_url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
            "provider_name": "YouTube",
        })))
        .mount(server)
        .await;
}

async fn add_video(app: &TestApp, cookie: &str, url: &str) -> Response<Body> {
    app.post_form("/add_youtube", form(&[("youtube_url", url)]), Some(cookie))
        .await
}

async fn flash_after(app: &TestApp, cookie: &str, response: &Response<Body>) -> serde_json::Value {
    let mut cookies = cookies_from(response);
    cookies.push(cookie.to_string());
    let response = app.get("/dashboard", Some(&cookies.join("; "))).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["flash"].clone()
}

#[tokio::test]
async fn extracted_metadata_lands_in_the_catalog() {
    let (app, server) = spawn_with_oembed().await;
    mount_oembed(&server).await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = add_video(
        &app,
        &cookie,
        &format!("https://www.youtube.com/watch?v={}", VIDEO_ID),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let flash = flash_after(&app, &cookie, &response).await;
    assert_eq!(flash, "Successfully added 1 new videos! (0 already existed)");

    let response = app.get("/youtube", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let videos = body_json(response).await;
    let videos = videos.as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["video_id"], VIDEO_ID);
    assert_eq!(videos[0]["title"], "Classic video");
    assert_eq!(videos[0]["channel_name"], "Classic channel");
    assert_eq!(
        videos[0]["url"],
        format!("https://www.youtube.com/watch?v={}", VIDEO_ID)
    );
}

#[tokio::test]
async fn resubmitting_the_same_video_is_skipped_not_overwritten() {
    let (app, server) = spawn_with_oembed().await;
    mount_oembed(&server).await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    add_video(
        &app,
        &cookie,
        &format!("https://www.youtube.com/watch?v={}", VIDEO_ID),
    )
    .await;

    // Same video through the short URL form
    let response = add_video(&app, &cookie, &format!("https://youtu.be/{}", VIDEO_ID)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let flash = flash_after(&app, &cookie, &response).await;
    assert_eq!(
        flash,
        "No new videos were added. 1 videos already existed in your collection."
    );

    let response = app.get("/youtube", Some(&cookie)).await;
    let videos = body_json(response).await;
    assert_eq!(videos.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn catalogs_are_per_user() {
    let (app, server) = spawn_with_oembed().await;
    mount_oembed(&server).await;
    let alice = app.register_and_login("alice", "pw1", "a@x.com").await;
    let bob = app.register_and_login("bob", "pw2", "b@x.com").await;

    add_video(
        &app,
        &alice,
        &format!("https://www.youtube.com/watch?v={}", VIDEO_ID),
    )
    .await;

    // Bob's catalog is empty, and his own insert is not a duplicate
    let response = app.get("/youtube", Some(&bob)).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    let response = add_video(&app, &bob, &format!("https://youtu.be/{}", VIDEO_ID)).await;
    let flash = flash_after(&app, &bob, &response).await;
    assert_eq!(flash, "Successfully added 1 new videos! (0 already existed)");
}

#[tokio::test]
async fn extraction_failure_is_surfaced_as_a_flash_message() {
    // No mock mounted: the endpoint 404s every request
    let (app, _server) = spawn_with_oembed().await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = add_video(
        &app,
        &cookie,
        &format!("https://www.youtube.com/watch?v={}", VIDEO_ID),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let flash = flash_after(&app, &cookie, &response).await;
    assert!(flash
        .as_str()
        .unwrap()
        .starts_with("Error processing YouTube URL:"));
}

#[tokio::test]
async fn unrecognizable_video_urls_are_rejected() {
    let (app, server) = spawn_with_oembed().await;
    mount_oembed(&server).await;
    let cookie = app.register_and_login("alice", "pw1", "a@x.com").await;

    let response = add_video(&app, &cookie, "https://vimeo.com/12345").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let flash = flash_after(&app, &cookie, &response).await;
    assert!(flash
        .as_str()
        .unwrap()
        .starts_with("Error processing YouTube URL:"));

    let response = app.get("/youtube", Some(&cookie)).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
