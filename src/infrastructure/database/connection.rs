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

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// 创建数据库连接池
///
/// SQLite文件库用小连接池就够了；`sqlite::memory:`（测试用）
/// 必须限制为单连接，否则每个连接各有一份空库。
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(settings.url.to_owned());

    opt.max_connections(settings.max_connections.unwrap_or(10))
        .min_connections(settings.min_connections.unwrap_or(1))
        .sqlx_logging(true);

    if let Some(timeout) = settings.connect_timeout.map(Duration::from_secs) {
        opt.connect_timeout(timeout).acquire_timeout(timeout);
    }

    if let Some(idle) = settings.idle_timeout.map(Duration::from_secs) {
        opt.idle_timeout(idle);
    }

    Database::connect(opt).await
}
