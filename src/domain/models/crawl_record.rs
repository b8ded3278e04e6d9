// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 爬取记录实体
///
/// 每次爬取尝试追加一行，之后不再修改。
/// `crawl_data`是序列化后的[`CrawlPayload`]。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// 记录唯一标识符
    pub id: i32,
    /// 归属用户ID
    pub user_id: i32,
    /// 爬取的目标URL
    pub url: String,
    /// 序列化的爬取结果
    pub crawl_data: serde_json::Value,
    /// 本次尝试的结果状态
    pub status: CrawlStatus,
    /// 爬取时间
    pub crawl_date: DateTime<Utc>,
}

/// 爬取历史列表项
///
/// 历史页不需要携带完整结果blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub id: i32,
    pub url: String,
    pub status: CrawlStatus,
    pub crawl_date: DateTime<Utc>,
}

/// 待追加的爬取记录
#[derive(Debug, Clone)]
pub struct NewCrawlRecord {
    pub user_id: i32,
    pub url: String,
    pub crawl_data: serde_json::Value,
    pub status: CrawlStatus,
}

/// 单次爬取尝试的结构化结果
///
/// 成功时携带渲染内容，失败时只携带错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlPayload {
    /// 目标URL
    pub url: String,
    /// HTTP状态码（请求未发出时为空）
    pub status_code: Option<u16>,
    /// 原始HTML
    #[serde(default)]
    pub html: String,
    /// 清理后的HTML
    #[serde(default)]
    pub cleaned_html: String,
    /// 提取的可读文本
    #[serde(default)]
    pub text: String,
    /// 页面链接
    #[serde(default)]
    pub links: Vec<String>,
    /// 响应头
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// 抓取时间
    pub fetched_at: DateTime<Utc>,
    /// 失败原因
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 爬取状态枚举
///
/// 一次尝试要么完成要么失败，记录追加后不再变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    /// 已完成
    #[default]
    Completed,
    /// 已失败
    Failed,
}

/// 将爬取状态格式化为字符串表示
impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrawlStatus::Completed => write!(f, "completed"),
            CrawlStatus::Failed => write!(f, "failed"),
        }
    }
}

/// 从字符串解析爬取状态
///
/// 用于从数据库恢复状态值
impl FromStr for CrawlStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(CrawlStatus::Completed),
            "failed" => Ok(CrawlStatus::Failed),
            _ => Err(()),
        }
    }
}
