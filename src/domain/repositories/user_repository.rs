// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::inventory_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;

/// 用户仓库特质
///
/// 定义账号数据访问接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 成功创建后返回用户（含生成的ID）
    /// * `Err(RepositoryError::AlreadyExists)` - 用户名或邮箱已被占用
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;

    /// 根据ID查找用户
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
