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

use crate::domain::models::crawl_record::{CrawlRecord, CrawlStatus, CrawlSummary, NewCrawlRecord};
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::inventory_repository::RepositoryError;
use crate::infrastructure::database::entities::crawled_data as crawl_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 爬取记录仓库实现
pub struct CrawlRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CrawlRepositoryImpl {
    /// 创建新的爬取记录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn parse_status(status: &str) -> Result<CrawlStatus, RepositoryError> {
    match status {
        "completed" => Ok(CrawlStatus::Completed),
        "failed" => Ok(CrawlStatus::Failed),
        _ => Err(RepositoryError::Database(DbErr::Custom(
            "Invalid crawl status".to_string(),
        ))),
    }
}

fn to_domain(m: crawl_entity::Model) -> Result<CrawlRecord, RepositoryError> {
    let status = parse_status(&m.status)?;
    Ok(CrawlRecord {
        id: m.id,
        user_id: m.user_id,
        url: m.url,
        crawl_data: m.crawl_data,
        status,
        crawl_date: m.crawl_date.into(),
    })
}

#[async_trait]
impl CrawlRepository for CrawlRepositoryImpl {
    async fn append(&self, record: &NewCrawlRecord) -> Result<CrawlRecord, RepositoryError> {
        let model = crawl_entity::ActiveModel {
            user_id: Set(record.user_id),
            url: Set(record.url.clone()),
            crawl_data: Set(record.crawl_data.clone()),
            status: Set(record.status.to_string()),
            crawl_date: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        to_domain(inserted)
    }

    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<CrawlSummary>, RepositoryError> {
        let models = crawl_entity::Entity::find()
            .filter(crawl_entity::Column::UserId.eq(owner_id))
            .order_by_desc(crawl_entity::Column::CrawlDate)
            .order_by_desc(crawl_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        models
            .into_iter()
            .map(|m| {
                let status = parse_status(&m.status)?;
                Ok(CrawlSummary {
                    id: m.id,
                    url: m.url,
                    status,
                    crawl_date: m.crawl_date.into(),
                })
            })
            .collect()
    }

    async fn find_for_owner(
        &self,
        owner_id: i32,
        record_id: i32,
    ) -> Result<Option<CrawlRecord>, RepositoryError> {
        let model = crawl_entity::Entity::find()
            .filter(crawl_entity::Column::Id.eq(record_id))
            .filter(crawl_entity::Column::UserId.eq(owner_id))
            .one(self.db.as_ref())
            .await?;

        model.map(to_domain).transpose()
    }
}
