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

use crate::domain::models::youtube_video::{VideoMetadata, YoutubeVideo};
use crate::domain::repositories::inventory_repository::RepositoryError;
use crate::domain::repositories::youtube_repository::YoutubeRepository;
use crate::infrastructure::database::entities::youtube_data as youtube_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// YouTube目录仓库实现
pub struct YoutubeRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl YoutubeRepositoryImpl {
    /// 创建新的YouTube目录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(m: youtube_entity::Model) -> YoutubeVideo {
    YoutubeVideo {
        id: m.id,
        user_id: m.user_id,
        video_id: m.video_id,
        title: m.title,
        url: m.url,
        thumbnail_url: m.thumbnail_url,
        channel_name: m.channel_name,
    }
}

#[async_trait]
impl YoutubeRepository for YoutubeRepositoryImpl {
    async fn insert(
        &self,
        owner_id: i32,
        metadata: &VideoMetadata,
    ) -> Result<YoutubeVideo, RepositoryError> {
        let model = youtube_entity::ActiveModel {
            user_id: Set(owner_id),
            video_id: Set(metadata.video_id.clone()),
            title: Set(metadata.title.clone()),
            url: Set(metadata.url.clone()),
            thumbnail_url: Set(metadata.thumbnail_url.clone()),
            channel_name: Set(metadata.channel_name.clone()),
            ..Default::default()
        };

        match model.insert(self.db.as_ref()).await {
            Ok(m) => Ok(to_domain(m)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RepositoryError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, owner_id: i32, video_id: &str) -> Result<bool, RepositoryError> {
        let count = youtube_entity::Entity::find()
            .filter(youtube_entity::Column::UserId.eq(owner_id))
            .filter(youtube_entity::Column::VideoId.eq(video_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<YoutubeVideo>, RepositoryError> {
        let models = youtube_entity::Entity::find()
            .filter(youtube_entity::Column::UserId.eq(owner_id))
            .order_by_asc(youtube_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(to_domain).collect())
    }
}
