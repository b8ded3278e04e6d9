// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};

/// 闪现消息Cookie名
pub const FLASH_COOKIE: &str = "flash";

/// 设置闪现消息
///
/// 消息存放在私有Cookie中，下一次页面请求读取后即清除
pub fn set(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// 取出并清除闪现消息
pub fn take(jar: PrivateCookieJar) -> (Option<String>, PrivateCookieJar) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
            (Some(message), jar)
        }
        None => (None, jar),
    }
}
