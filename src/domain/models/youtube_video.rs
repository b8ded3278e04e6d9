// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// YouTube视频目录条目
///
/// 同一用户下按`video_id`去重，重复提交跳过而非覆盖。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeVideo {
    /// 条目唯一标识符
    pub id: i32,
    /// 归属用户ID
    pub user_id: i32,
    /// YouTube视频ID
    pub video_id: String,
    /// 视频标题
    pub title: String,
    /// 视频页面URL
    pub url: String,
    /// 缩略图URL
    pub thumbnail_url: String,
    /// 频道名称
    pub channel_name: String,
}

/// 提取到的视频元数据
///
/// 外部提取器的返回值，入库前的中间表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub channel_name: String,
}
