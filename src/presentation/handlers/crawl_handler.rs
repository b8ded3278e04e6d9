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
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        dto::crawl_request::CrawlRequestDto,
        use_cases::crawl_use_case::{CrawlUseCase, CrawlUseCaseError},
    },
    config::settings::Settings,
    domain::{
        models::crawl_record::CrawlSummary, repositories::crawl_repository::CrawlRepository,
    },
    engines::traits::PageFetcher,
    presentation::{
        flash,
        middleware::session_middleware::{CurrentUser, SessionState},
    },
};

/// 爬取历史视图
#[derive(Debug, Serialize)]
struct CrawlHistoryView {
    flash: Option<String>,
    records: Vec<CrawlSummary>,
}

fn build_use_case<CR>(
    crawl_repo: Arc<CR>,
    fetcher: Arc<dyn PageFetcher>,
    settings: &Settings,
) -> CrawlUseCase<CR>
where
    CR: CrawlRepository + 'static,
{
    CrawlUseCase::new(
        crawl_repo,
        fetcher,
        Duration::from_secs(settings.crawler.timeout_secs),
        settings.crawler.max_links,
    )
}

/// 爬取一个URL
///
/// 单次尝试；成败都会在历史里留下一条记录
pub async fn crawl<CR>(
    Extension(crawl_repo): Extension<Arc<CR>>,
    Extension(fetcher): Extension<Arc<dyn PageFetcher>>,
    Extension(settings): Extension<Arc<Settings>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    Form(payload): Form<CrawlRequestDto>,
) -> impl IntoResponse
where
    CR: CrawlRepository + 'static,
{
    let use_case = build_use_case(crawl_repo, fetcher, &settings);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.crawl(current_user.id, payload).await {
        Ok(_) => {
            let jar = flash::set(jar, "Website crawled successfully!");
            (jar, Redirect::to("/crawl_history")).into_response()
        }
        Err(CrawlUseCaseError::External(msg)) => {
            let jar = flash::set(jar, &format!("Error crawling website: {}", msg));
            (jar, Redirect::to("/crawl_history")).into_response()
        }
        Err(CrawlUseCaseError::ValidationError(msg)) => {
            let jar = flash::set(jar, &msg);
            (jar, Redirect::to("/crawl_history")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 爬取历史
pub async fn crawl_history<CR>(
    Extension(crawl_repo): Extension<Arc<CR>>,
    Extension(fetcher): Extension<Arc<dyn PageFetcher>>,
    Extension(settings): Extension<Arc<Settings>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    CR: CrawlRepository + 'static,
{
    let use_case = build_use_case(crawl_repo, fetcher, &settings);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());
    let (message, jar) = flash::take(jar);

    match use_case.history(current_user.id).await {
        Ok(records) => (
            jar,
            Json(CrawlHistoryView {
                flash: message,
                records,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 爬取记录详情
///
/// 记录不存在或不属于当前用户时闪现提示并跳回历史页
pub async fn crawl_details<CR>(
    Extension(crawl_repo): Extension<Arc<CR>>,
    Extension(fetcher): Extension<Arc<dyn PageFetcher>>,
    Extension(settings): Extension<Arc<Settings>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    Path(record_id): Path<i32>,
) -> impl IntoResponse
where
    CR: CrawlRepository + 'static,
{
    let use_case = build_use_case(crawl_repo, fetcher, &settings);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.details(current_user.id, record_id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(CrawlUseCaseError::NotFound) => {
            let jar = flash::set(jar, "Crawl not found");
            (jar, Redirect::to("/crawl_history")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<CrawlUseCaseError> for (StatusCode, String) {
    fn from(err: CrawlUseCaseError) -> Self {
        match err {
            CrawlUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            CrawlUseCaseError::NotFound => (StatusCode::NOT_FOUND, "Crawl not found".to_string()),
            CrawlUseCaseError::External(msg) => (StatusCode::BAD_GATEWAY, msg),
            CrawlUseCaseError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
