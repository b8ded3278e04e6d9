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
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::youtube_request::AddYoutubeDto,
        use_cases::youtube_use_case::{YoutubeUseCase, YoutubeUseCaseError},
    },
    domain::repositories::youtube_repository::YoutubeRepository,
    engines::traits::VideoExtractor,
    presentation::{
        flash,
        middleware::session_middleware::{CurrentUser, SessionState},
    },
};

/// 收藏一个YouTube视频
///
/// 重复视频跳过，不覆盖已有行
pub async fn add_youtube<YR>(
    Extension(youtube_repo): Extension<Arc<YR>>,
    Extension(extractor): Extension<Arc<dyn VideoExtractor>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    Form(payload): Form<AddYoutubeDto>,
) -> impl IntoResponse
where
    YR: YoutubeRepository + 'static,
{
    let use_case = YoutubeUseCase::new(youtube_repo, extractor);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.add_video(current_user.id, payload).await {
        Ok(outcome) => {
            let message = if outcome.added > 0 {
                format!(
                    "Successfully added {} new videos! ({} already existed)",
                    outcome.added, outcome.skipped
                )
            } else {
                format!(
                    "No new videos were added. {} videos already existed in your collection.",
                    outcome.skipped
                )
            };
            let jar = flash::set(jar, &message);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(YoutubeUseCaseError::External(msg)) => {
            let jar = flash::set(jar, &format!("Error processing YouTube URL: {}", msg));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(YoutubeUseCaseError::ValidationError(msg)) => {
            let jar = flash::set(jar, &msg);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 用户的视频目录
pub async fn list_videos<YR>(
    Extension(youtube_repo): Extension<Arc<YR>>,
    Extension(extractor): Extension<Arc<dyn VideoExtractor>>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse
where
    YR: YoutubeRepository + 'static,
{
    let use_case = YoutubeUseCase::new(youtube_repo, extractor);

    match use_case.list_videos(current_user.id).await {
        Ok(videos) => (StatusCode::OK, Json(videos)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<YoutubeUseCaseError> for (StatusCode, String) {
    fn from(err: YoutubeUseCaseError) -> Self {
        match err {
            YoutubeUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            YoutubeUseCaseError::External(msg) => (StatusCode::BAD_GATEWAY, msg),
            YoutubeUseCaseError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
