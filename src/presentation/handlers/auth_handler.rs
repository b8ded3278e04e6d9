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
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::auth_request::{LoginRequestDto, RegisterRequestDto},
        use_cases::auth_use_case::{AuthUseCase, AuthUseCaseError},
    },
    domain::repositories::user_repository::UserRepository,
    presentation::{
        errors::AppError,
        flash,
        middleware::session_middleware::{
            session_cookie, CurrentUser, SessionState, SESSION_COOKIE,
        },
    },
};

/// 着陆页
///
/// 已有会话直接跳转到面板
pub async fn landing(
    Extension(session): Extension<SessionState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());
    if jar.get(SESSION_COOKIE).is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let (message, jar) = flash::take(jar);
    (
        jar,
        Json(json!({
            "service": "stockrs",
            "version": env!("CARGO_PKG_VERSION"),
            "flash": message,
        })),
    )
        .into_response()
}

/// 注册表单描述
pub async fn register_form() -> impl IntoResponse {
    Json(json!({ "fields": ["username", "password", "email"] }))
}

/// 登录表单描述
pub async fn login_form(
    Extension(session): Extension<SessionState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());
    let (message, jar) = flash::take(jar);
    (
        jar,
        Json(json!({ "fields": ["username", "password"], "flash": message })),
    )
}

/// 注册新账号
pub async fn register<UR>(
    Extension(user_repo): Extension<Arc<UR>>,
    Extension(session): Extension<SessionState>,
    headers: HeaderMap,
    Form(payload): Form<RegisterRequestDto>,
) -> impl IntoResponse
where
    UR: UserRepository + 'static,
{
    let use_case = AuthUseCase::new(user_repo);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.register(payload).await {
        Ok(_) => {
            let jar = flash::set(jar, "Registration successful! Please log in.");
            (jar, Redirect::to("/login")).into_response()
        }
        Err(AuthUseCaseError::ValidationError(msg)) => {
            let jar = flash::set(jar, &msg);
            (jar, Redirect::to("/register")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 登录并建立会话
pub async fn login<UR>(
    Extension(user_repo): Extension<Arc<UR>>,
    Extension(session): Extension<SessionState>,
    headers: HeaderMap,
    Form(payload): Form<LoginRequestDto>,
) -> impl IntoResponse
where
    UR: UserRepository + 'static,
{
    let use_case = AuthUseCase::new(user_repo);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.login(payload).await {
        Ok(user) => {
            let jar = jar.add(session_cookie(user.id));
            let jar = flash::set(jar, "Welcome back!");
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(AuthUseCaseError::InvalidCredentials) => {
            let jar = flash::set(jar, "Invalid username or password");
            (jar, Redirect::to("/login")).into_response()
        }
        Err(AuthUseCaseError::ValidationError(msg)) => {
            let jar = flash::set(jar, &msg);
            (jar, Redirect::to("/login")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 注销
///
/// 无条件清除会话Cookie
pub async fn logout(
    Extension(session): Extension<SessionState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    let jar = flash::set(jar, "You have been logged out.");
    (jar, Redirect::to("/"))
}

/// 当前用户信息
pub async fn profile<UR>(
    Extension(user_repo): Extension<Arc<UR>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError>
where
    UR: UserRepository + 'static,
{
    let user = user_repo
        .find_by_id(current_user.id)
        .await?
        .ok_or(crate::domain::repositories::inventory_repository::RepositoryError::NotFound)?;

    Ok(Json(user))
}

impl From<AuthUseCaseError> for (StatusCode, String) {
    fn from(err: AuthUseCaseError) -> Self {
        match err {
            AuthUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthUseCaseError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password".to_string())
            }
            AuthUseCaseError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AuthUseCaseError::Hashing(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        }
    }
}
