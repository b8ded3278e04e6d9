// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::inventory_repository::RepositoryError;
use crate::domain::models::youtube_video::{VideoMetadata, YoutubeVideo};
use async_trait::async_trait;

/// YouTube目录仓库特质
#[async_trait]
pub trait YoutubeRepository: Send + Sync {
    /// 插入一条视频元数据
    ///
    /// # 返回值
    ///
    /// * `Ok(YoutubeVideo)` - 成功插入
    /// * `Err(RepositoryError::AlreadyExists)` - 该用户已收藏此video_id
    async fn insert(
        &self,
        owner_id: i32,
        metadata: &VideoMetadata,
    ) -> Result<YoutubeVideo, RepositoryError>;

    /// 判断该用户是否已收藏此视频
    async fn exists(&self, owner_id: i32, video_id: &str) -> Result<bool, RepositoryError>;

    /// 列出用户的视频目录
    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<YoutubeVideo>, RepositoryError>;
}
