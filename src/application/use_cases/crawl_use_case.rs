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
    application::dto::crawl_request::CrawlRequestDto,
    domain::{
        models::crawl_record::{
            CrawlPayload, CrawlRecord, CrawlStatus, CrawlSummary, NewCrawlRecord,
        },
        repositories::{
            crawl_repository::CrawlRepository, inventory_repository::RepositoryError,
        },
    },
    engines::traits::{FetchRequest, PageFetcher},
    utils::page_content,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use validator::Validate;

#[derive(Error, Debug)]
pub enum CrawlUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Crawl not found")]
    NotFound,
    #[error("Crawl failed: {0}")]
    External(String),
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CrawlUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CrawlUseCaseError::NotFound,
            other => CrawlUseCaseError::Repository(other),
        }
    }
}

pub struct CrawlUseCase<CR> {
    crawl_repo: Arc<CR>,
    fetcher: Arc<dyn PageFetcher>,
    timeout: Duration,
    max_links: usize,
}

impl<CR> CrawlUseCase<CR>
where
    CR: CrawlRepository + 'static,
{
    pub fn new(
        crawl_repo: Arc<CR>,
        fetcher: Arc<dyn PageFetcher>,
        timeout: Duration,
        max_links: usize,
    ) -> Self {
        Self {
            crawl_repo,
            fetcher,
            timeout,
            max_links,
        }
    }

    /// 爬取一个URL并追加记录
    ///
    /// 只尝试一次。抓取成功追加completed记录；抓取失败追加failed记录
    /// 并返回External错误。URL校验失败时不产生任何记录。
    pub async fn crawl(
        &self,
        owner_id: i32,
        dto: CrawlRequestDto,
    ) -> Result<CrawlRecord, CrawlUseCaseError> {
        dto.validate()
            .map_err(|e| CrawlUseCaseError::ValidationError(e.to_string()))?;

        let request = FetchRequest {
            url: dto.url.clone(),
            timeout: self.timeout,
        };

        match self.fetcher.fetch(&request).await {
            Ok(snapshot) => {
                let content =
                    page_content::process_html(&snapshot.content, &dto.url, self.max_links);

                let payload = CrawlPayload {
                    url: dto.url.clone(),
                    status_code: Some(snapshot.status_code),
                    html: snapshot.content,
                    cleaned_html: content.cleaned_html,
                    text: content.text,
                    links: content.links,
                    headers: snapshot.headers,
                    fetched_at: Utc::now(),
                    error: None,
                };

                self.append(owner_id, &dto.url, payload, CrawlStatus::Completed)
                    .await
            }
            Err(e) => {
                warn!("Crawl of {} failed: {}", dto.url, e);

                let payload = CrawlPayload {
                    url: dto.url.clone(),
                    status_code: None,
                    html: String::new(),
                    cleaned_html: String::new(),
                    text: String::new(),
                    links: Vec::new(),
                    headers: HashMap::new(),
                    fetched_at: Utc::now(),
                    error: Some(e.to_string()),
                };

                self.append(owner_id, &dto.url, payload, CrawlStatus::Failed)
                    .await?;
                Err(CrawlUseCaseError::External(e.to_string()))
            }
        }
    }

    /// 用户的爬取历史，按时间倒序
    pub async fn history(&self, owner_id: i32) -> Result<Vec<CrawlSummary>, CrawlUseCaseError> {
        Ok(self.crawl_repo.list_for_owner(owner_id).await?)
    }

    /// 单条爬取记录详情
    pub async fn details(
        &self,
        owner_id: i32,
        record_id: i32,
    ) -> Result<CrawlRecord, CrawlUseCaseError> {
        self.crawl_repo
            .find_for_owner(owner_id, record_id)
            .await?
            .ok_or(CrawlUseCaseError::NotFound)
    }

    async fn append(
        &self,
        owner_id: i32,
        url: &str,
        payload: CrawlPayload,
        status: CrawlStatus,
    ) -> Result<CrawlRecord, CrawlUseCaseError> {
        let crawl_data = serde_json::to_value(&payload)
            .map_err(|e| CrawlUseCaseError::External(e.to_string()))?;

        let record = NewCrawlRecord {
            user_id: owner_id,
            url: url.to_string(),
            crawl_data,
            status,
        };

        Ok(self.crawl_repo.append(&record).await?)
    }
}
