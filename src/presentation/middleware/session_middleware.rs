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

use crate::infrastructure::database::entities::user as user_entity;
use crate::presentation::flash;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use base64::Engine;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

/// 会话Cookie名
pub const SESSION_COOKIE: &str = "session";

/// 会话状态
#[derive(Clone)]
pub struct SessionState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
    /// Cookie加密密钥
    pub key: Key,
}

/// 已认证用户
///
/// 会话校验通过后注入请求扩展，处理器直接提取
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
}

/// 从配置的secret构造Cookie密钥
///
/// secret为base64编码的64字节；未配置时随机生成，
/// 重启后已有会话全部失效
pub fn session_key(secret: Option<&str>) -> anyhow::Result<Key> {
    match secret {
        Some(secret) => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(secret)
                .map_err(|e| anyhow::anyhow!("session.secret is not valid base64: {}", e))?;
            if bytes.len() < 64 {
                return Err(anyhow::anyhow!(
                    "session.secret must decode to at least 64 bytes, got {}",
                    bytes.len()
                ));
            }
            Ok(Key::from(&bytes))
        }
        None => Ok(Key::generate()),
    }
}

/// 构造会话Cookie
pub fn session_cookie(user_id: i32) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// 会话中间件
///
/// 校验私有会话Cookie并加载用户。浏览器动词（GET/POST）未认证时
/// 重定向到登录页并附带闪现消息，API动词返回401。
///
/// # 参数
///
/// * `state` - 会话状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let method = req.method().clone();
    let jar = PrivateCookieJar::from_headers(req.headers(), state.key.clone());

    let user_id = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<i32>().ok());

    let Some(user_id) = user_id else {
        return Err(unauthenticated(&method, state.key.clone()));
    };

    match user_entity::Entity::find_by_id(user_id)
        .one(state.db.as_ref())
        .await
    {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser {
                id: user.id,
                username: user.username,
            });
            Ok(next.run(req).await)
        }
        // Stale cookie for a user that no longer exists
        Ok(None) => Err(unauthenticated(&method, state.key.clone())),
        Err(e) => {
            tracing::error!("Database error loading session user: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

fn unauthenticated(method: &Method, key: Key) -> Response {
    if *method == Method::GET || *method == Method::POST {
        let jar = PrivateCookieJar::from_headers(&HeaderMap::new(), key);
        let jar = flash::set(jar, "Please log in first.");
        (jar, Redirect::to("/login")).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Unauthenticated").into_response()
    }
}
