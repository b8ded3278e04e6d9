// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::inventory_item::{InventoryItem, NewInventoryItem};
use async_trait::async_trait;
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,
}

/// 库存仓库特质
///
/// 定义库存条目的数据访问接口。所有操作都要求传入归属用户ID，
/// 不允许跨用户读写。
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// 插入库存条目
    ///
    /// # 返回值
    ///
    /// * `Ok(InventoryItem)` - 成功插入后返回完整条目（含生成的ID）
    /// * `Err(RepositoryError)` - 插入失败时返回错误
    async fn insert(
        &self,
        owner_id: i32,
        item: &NewInventoryItem,
    ) -> Result<InventoryItem, RepositoryError>;

    /// 列出用户的全部库存条目，按插入顺序
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// 更新指定条目的数量
    ///
    /// # 返回值
    ///
    /// * `Ok(InventoryItem)` - 更新后的条目
    /// * `Err(RepositoryError::NotFound)` - 条目不存在或不属于该用户
    async fn update_quantity(
        &self,
        owner_id: i32,
        item_id: i32,
        quantity: i64,
    ) -> Result<InventoryItem, RepositoryError>;

    /// 删除指定条目
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 删除成功
    /// * `Err(RepositoryError::NotFound)` - 条目不存在或不属于该用户
    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), RepositoryError>;
}
