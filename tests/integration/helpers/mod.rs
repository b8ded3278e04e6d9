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

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use stockrs::config::settings::{
    CrawlerSettings, DatabaseSettings, MediaSettings, ServerSettings, SessionSettings, Settings,
    YoutubeSettings,
};
use stockrs::engines::http_fetcher::HttpFetcher;
use stockrs::engines::oembed_extractor::OembedExtractor;
use stockrs::engines::traits::{PageFetcher, VideoExtractor};
use stockrs::infrastructure::database::connection;
use stockrs::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use stockrs::infrastructure::repositories::inventory_repo_impl::InventoryRepositoryImpl;
use stockrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use stockrs::infrastructure::repositories::youtube_repo_impl::YoutubeRepositoryImpl;
use stockrs::presentation::middleware::session_middleware::{session_key, SessionState};
use stockrs::presentation::routes::{build_router, AppContext};
use tower::util::ServiceExt;

/// 测试配置
///
/// 单连接的内存SQLite，所有外部端点指向可被wiremock接管的地址
pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            // In-memory SQLite: one pooled connection keeps the schema alive
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout: Some(10),
            idle_timeout: Some(3600),
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        session: SessionSettings { secret: None },
        crawler: CrawlerSettings {
            timeout_secs: 5,
            user_agent: "stockrs-test".to_string(),
            max_links: 50,
        },
        youtube: YoutubeSettings {
            oembed_url: "http://127.0.0.1:1/oembed".to_string(),
            timeout_secs: 2,
        },
        media: MediaSettings {
            transcribe_model: "whisper-1".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<DatabaseConnection>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_settings()).await
}

pub async fn spawn_app_with(settings: Settings) -> TestApp {
    let db = connection::create_pool(&settings.database)
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    let db = Arc::new(db);

    let settings = Arc::new(settings);
    let session = SessionState {
        db: db.clone(),
        key: session_key(None).expect("random key"),
    };

    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(HttpFetcher::new(settings.crawler.user_agent.clone()));
    let extractor: Arc<dyn VideoExtractor> = Arc::new(OembedExtractor::new(
        settings.youtube.oembed_url.clone(),
        Duration::from_secs(settings.youtube.timeout_secs),
    ));

    let router = build_router(AppContext {
        settings: settings.clone(),
        session,
        user_repo: Arc::new(UserRepositoryImpl::new(db.clone())),
        inventory_repo: Arc::new(InventoryRepositoryImpl::new(db.clone())),
        crawl_repo: Arc::new(CrawlRepositoryImpl::new(db.clone())),
        youtube_repo: Arc::new(YoutubeRepositoryImpl::new(db.clone())),
        fetcher,
        extractor,
    });

    TestApp { router, db }
}

/// URL编码一个表单体
pub fn form(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// 收集响应里所有Set-Cookie的`name=value`段
pub fn cookies_from(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(|v| v.to_string())
        .collect()
}

/// 从响应中取出会话Cookie
pub fn session_cookie_from(response: &Response<Body>) -> Option<String> {
    cookies_from(response)
        .into_iter()
        .find(|c| c.starts_with("session="))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    pub async fn get(&self, path: &str, cookies: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(
        &self,
        path: &str,
        body: String,
        cookies: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        self.request(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn register(&self, username: &str, password: &str, email: &str) -> Response<Body> {
        self.post_form(
            "/register",
            form(&[
                ("username", username),
                ("password", password),
                ("email", email),
            ]),
            None,
        )
        .await
    }

    /// 登录并返回会话Cookie，凭据无效时返回None
    pub async fn login(&self, username: &str, password: &str) -> Option<String> {
        let response = self
            .post_form(
                "/login",
                form(&[("username", username), ("password", password)]),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session_cookie_from(&response)
    }

    /// 注册加登录，返回会话Cookie
    pub async fn register_and_login(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> String {
        let response = self.register(username, password, email).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        self.login(username, password)
            .await
            .expect("fresh account should log in")
    }
}
