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

use crate::{
    application::dto::inventory_request::AddItemDto,
    domain::{
        models::inventory_item::{InventoryItem, NewInventoryItem},
        repositories::inventory_repository::{InventoryRepository, RepositoryError},
    },
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;
use validator::Validate;

#[derive(Error, Debug)]
pub enum InventoryUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Item not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for InventoryUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => InventoryUseCaseError::NotFound,
            other => InventoryUseCaseError::Repository(other),
        }
    }
}

/// CSV导入结果汇总
///
/// 每行独立解析，坏行只计数，不中断整批
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

/// 单行解析失败的原因
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("Row has fewer than 5 fields")]
    MissingFields,
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Quantity must be a non-negative integer")]
    BadQuantity,
}

pub struct InventoryUseCase<IR> {
    inventory_repo: Arc<IR>,
}

impl<IR> InventoryUseCase<IR>
where
    IR: InventoryRepository + 'static,
{
    pub fn new(inventory_repo: Arc<IR>) -> Self {
        Self { inventory_repo }
    }

    /// 添加库存条目
    pub async fn add_item(
        &self,
        owner_id: i32,
        dto: AddItemDto,
    ) -> Result<InventoryItem, InventoryUseCaseError> {
        dto.validate()
            .map_err(|e| InventoryUseCaseError::ValidationError(e.to_string()))?;

        let item = parse_fields(
            &dto.name,
            &dto.quantity,
            &dto.category,
            &dto.sector,
            &dto.application,
        )
        .map_err(|e| InventoryUseCaseError::ValidationError(e.to_string()))?;

        Ok(self.inventory_repo.insert(owner_id, &item).await?)
    }

    /// 列出用户的库存条目
    pub async fn list_items(
        &self,
        owner_id: i32,
    ) -> Result<Vec<InventoryItem>, InventoryUseCaseError> {
        Ok(self.inventory_repo.list_for_owner(owner_id).await?)
    }

    /// 更新条目数量
    pub async fn update_quantity(
        &self,
        owner_id: i32,
        item_id: i32,
        quantity: i64,
    ) -> Result<InventoryItem, InventoryUseCaseError> {
        if quantity < 0 {
            return Err(InventoryUseCaseError::ValidationError(
                "Quantity cannot be negative".to_string(),
            ));
        }

        Ok(self
            .inventory_repo
            .update_quantity(owner_id, item_id, quantity)
            .await?)
    }

    /// 删除条目
    pub async fn delete_item(
        &self,
        owner_id: i32,
        item_id: i32,
    ) -> Result<(), InventoryUseCaseError> {
        Ok(self.inventory_repo.delete(owner_id, item_id).await?)
    }

    /// 批量导入CSV
    ///
    /// 格式为无表头的 (name, quantity, category, sector, application) 行，
    /// 多余的尾部字段忽略。坏行计入`failed`，其余行照常入库。
    pub async fn import_csv(
        &self,
        owner_id: i32,
        data: &[u8],
    ) -> Result<ImportSummary, InventoryUseCaseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut imported = 0;
        let mut failed = 0;

        for record in reader.records() {
            let item = match record {
                Ok(record) => match parse_record(&record) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!("Skipping CSV row: {}", e);
                        failed += 1;
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Skipping unreadable CSV row: {}", e);
                    failed += 1;
                    continue;
                }
            };

            match self.inventory_repo.insert(owner_id, &item).await {
                Ok(_) => imported += 1,
                Err(e) => {
                    warn!("Skipping CSV row after insert failure: {}", e);
                    failed += 1;
                }
            }
        }

        Ok(ImportSummary { imported, failed })
    }
}

/// 解析一条CSV记录
fn parse_record(record: &csv::StringRecord) -> Result<NewInventoryItem, RowError> {
    if record.len() < 5 {
        return Err(RowError::MissingFields);
    }
    parse_fields(&record[0], &record[1], &record[2], &record[3], &record[4])
}

/// 表单和CSV共用的字段解析
fn parse_fields(
    name: &str,
    quantity: &str,
    category: &str,
    sector: &str,
    application: &str,
) -> Result<NewInventoryItem, RowError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RowError::EmptyName);
    }

    let quantity = parse_quantity(quantity)?;

    Ok(NewInventoryItem {
        name: name.to_string(),
        quantity,
        category: category.trim().to_string(),
        sector: sector.trim().to_string(),
        application: application.trim().to_string(),
    })
}

/// 解析数量字段，必须是非负整数
fn parse_quantity(raw: &str) -> Result<i64, RowError> {
    let quantity: i64 = raw.trim().parse().map_err(|_| RowError::BadQuantity)?;
    if quantity < 0 {
        return Err(RowError::BadQuantity);
    }
    Ok(quantity)
}
