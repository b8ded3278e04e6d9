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
    application::dto::youtube_request::AddYoutubeDto,
    domain::{
        models::youtube_video::YoutubeVideo,
        repositories::{
            inventory_repository::RepositoryError, youtube_repository::YoutubeRepository,
        },
    },
    engines::traits::VideoExtractor,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum YoutubeUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Extraction failed: {0}")]
    External(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 一次提交的入库结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOutcome {
    pub added: usize,
    pub skipped: usize,
}

pub struct YoutubeUseCase<YR> {
    youtube_repo: Arc<YR>,
    extractor: Arc<dyn VideoExtractor>,
}

impl<YR> YoutubeUseCase<YR>
where
    YR: YoutubeRepository + 'static,
{
    pub fn new(youtube_repo: Arc<YR>, extractor: Arc<dyn VideoExtractor>) -> Self {
        Self {
            youtube_repo,
            extractor,
        }
    }

    /// 提取并收藏一个视频
    ///
    /// 同一用户重复提交同一视频时跳过，不覆盖已有行
    pub async fn add_video(
        &self,
        owner_id: i32,
        dto: AddYoutubeDto,
    ) -> Result<CatalogOutcome, YoutubeUseCaseError> {
        dto.validate()
            .map_err(|e| YoutubeUseCaseError::ValidationError(e.to_string()))?;

        let metadata = self
            .extractor
            .extract(&dto.youtube_url)
            .await
            .map_err(|e| YoutubeUseCaseError::External(e.to_string()))?;

        if self
            .youtube_repo
            .exists(owner_id, &metadata.video_id)
            .await?
        {
            return Ok(CatalogOutcome {
                added: 0,
                skipped: 1,
            });
        }

        match self.youtube_repo.insert(owner_id, &metadata).await {
            Ok(_) => Ok(CatalogOutcome {
                added: 1,
                skipped: 0,
            }),
            // Concurrent submit of the same video wins the insert
            Err(RepositoryError::AlreadyExists) => Ok(CatalogOutcome {
                added: 0,
                skipped: 1,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// 用户的视频目录
    pub async fn list_videos(&self, owner_id: i32) -> Result<Vec<YoutubeVideo>, YoutubeUseCaseError> {
        Ok(self.youtube_repo.list_for_owner(owner_id).await?)
    }
}
