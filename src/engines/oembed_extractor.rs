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
use crate::engines::traits::{EngineError, VideoExtractor};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// 基于oEmbed端点的视频元数据提取器
///
/// 端点可配置，一次提取只请求一次
pub struct OembedExtractor {
    /// oEmbed端点URL
    endpoint: String,
    /// 请求超时时间
    timeout: Duration,
}

/// oEmbed响应体中用到的字段
#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: String,
    author_name: String,
    thumbnail_url: String,
}

impl OembedExtractor {
    /// 创建新的提取器实例
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

/// 从各种形态的视频URL中解析视频ID
///
/// 支持 `watch?v=`、`youtu.be/`、`/shorts/`、`/embed/` 和 `/live/`
pub fn parse_video_id(video_url: &str) -> Option<String> {
    let url = Url::parse(video_url).ok()?;
    let host = url.host_str()?.trim_start_matches("www.");

    let candidate = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "m.youtube.com" | "youtube-nocookie.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned()),
                Some("shorts") | Some("embed") | Some("live") => {
                    segments.next().map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    }?;

    let valid = !candidate.is_empty()
        && candidate.len() >= 6
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(candidate)
}

#[async_trait]
impl VideoExtractor for OembedExtractor {
    /// 提取单个视频的元数据
    ///
    /// # 返回值
    ///
    /// * `Ok(VideoMetadata)` - 提取到的元数据
    /// * `Err(EngineError)` - URL无法解析或oEmbed请求失败
    async fn extract(&self, video_url: &str) -> Result<VideoMetadata, EngineError> {
        let video_id = parse_video_id(video_url).ok_or_else(|| {
            EngineError::InvalidTarget(format!("Not a recognizable video URL: {}", video_url))
        })?;
        let canonical_url = format!("https://www.youtube.com/watch?v={}", video_id);

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client
            .get(&self.endpoint)
            .query(&[("url", canonical_url.as_str()), ("format", "json")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EngineError::Other(format!(
                "oEmbed endpoint returned {}",
                response.status()
            )));
        }

        let body: OembedResponse = response.json().await?;

        Ok(VideoMetadata {
            video_id,
            title: body.title,
            url: canonical_url,
            thumbnail_url: body.thumbnail_url,
            channel_name: body.author_name,
        })
    }

    /// 获取提取器名称
    fn name(&self) -> &'static str {
        "oembed"
    }
}
