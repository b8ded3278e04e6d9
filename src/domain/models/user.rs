// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户实体
///
/// 表示一个注册账号。密码只以Argon2id哈希形式存在，
/// 序列化时不输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: i32,
    /// 用户名，全局唯一
    pub username: String,
    /// 邮箱，全局唯一
    pub email: String,
    /// Argon2id密码哈希
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 注册时间
    pub created_at: DateTime<Utc>,
}
