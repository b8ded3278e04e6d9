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

use crate::domain::models::inventory_item::{InventoryItem, NewInventoryItem};
use crate::domain::repositories::inventory_repository::{InventoryRepository, RepositoryError};
use crate::infrastructure::database::entities::inventory as inventory_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 库存仓库实现
pub struct InventoryRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl InventoryRepositoryImpl {
    /// 创建新的库存仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(m: inventory_entity::Model) -> InventoryItem {
    InventoryItem {
        id: m.id,
        user_id: m.user_id,
        name: m.name,
        quantity: m.quantity,
        category: m.category,
        sector: m.sector,
        application: m.application,
        date_added: m.date_added.into(),
    }
}

#[async_trait]
impl InventoryRepository for InventoryRepositoryImpl {
    async fn insert(
        &self,
        owner_id: i32,
        item: &NewInventoryItem,
    ) -> Result<InventoryItem, RepositoryError> {
        let model = inventory_entity::ActiveModel {
            user_id: Set(owner_id),
            name: Set(item.name.clone()),
            quantity: Set(item.quantity),
            category: Set(item.category.clone()),
            sector: Set(item.sector.clone()),
            application: Set(item.application.clone()),
            date_added: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(to_domain(inserted))
    }

    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<InventoryItem>, RepositoryError> {
        let models = inventory_entity::Entity::find()
            .filter(inventory_entity::Column::UserId.eq(owner_id))
            .order_by_asc(inventory_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn update_quantity(
        &self,
        owner_id: i32,
        item_id: i32,
        quantity: i64,
    ) -> Result<InventoryItem, RepositoryError> {
        // Ownership check and load in one owner-filtered query
        let mut model: inventory_entity::ActiveModel = inventory_entity::Entity::find()
            .filter(inventory_entity::Column::Id.eq(item_id))
            .filter(inventory_entity::Column::UserId.eq(owner_id))
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.quantity = Set(quantity);
        let updated = model.update(self.db.as_ref()).await?;
        Ok(to_domain(updated))
    }

    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), RepositoryError> {
        let result = inventory_entity::Entity::delete_many()
            .filter(inventory_entity::Column::Id.eq(item_id))
            .filter(inventory_entity::Column::UserId.eq(owner_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
