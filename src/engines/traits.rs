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

use crate::domain::models::youtube_video::VideoMetadata;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 目标拒绝或无法解析
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 判断错误是否由超时引起
    pub fn is_timeout(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => e.is_timeout(),
            EngineError::Timeout => true,
            _ => false,
        }
    }
}

/// 抓取请求
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
}

/// 页面快照
///
/// 一次抓取返回的原始内容与响应元数据
pub struct PageSnapshot {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应正文
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应头
    pub headers: HashMap<String, String>,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取引擎特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行一次抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<PageSnapshot, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// 视频元数据提取器特质
#[async_trait]
pub trait VideoExtractor: Send + Sync {
    /// 提取单个视频的元数据
    async fn extract(&self, video_url: &str) -> Result<VideoMetadata, EngineError>;

    /// 提取器名称
    fn name(&self) -> &'static str;
}
