// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::inventory_repository::RepositoryError;
use crate::domain::models::crawl_record::{CrawlRecord, CrawlSummary, NewCrawlRecord};
use async_trait::async_trait;

/// 爬取记录仓库特质
///
/// 记录只追加，不更新也不删除
#[async_trait]
pub trait CrawlRepository: Send + Sync {
    /// 追加一条爬取记录
    async fn append(&self, record: &NewCrawlRecord) -> Result<CrawlRecord, RepositoryError>;

    /// 列出用户的爬取历史，按时间倒序，不携带结果blob
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<CrawlSummary>, RepositoryError>;

    /// 查找用户的一条完整爬取记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(CrawlRecord))` - 找到记录
    /// * `Ok(None)` - 记录不存在或不属于该用户
    async fn find_for_owner(
        &self,
        owner_id: i32,
        record_id: i32,
    ) -> Result<Option<CrawlRecord>, RepositoryError>;
}
