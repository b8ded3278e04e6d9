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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、会话、爬取和媒体工具等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 会话配置
    #[serde(default)]
    pub session: SessionSettings,
    /// 爬取配置
    pub crawler: CrawlerSettings,
    /// YouTube元数据提取配置
    pub youtube: YoutubeSettings,
    /// 媒体工具配置
    pub media: MediaSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 会话配置设置
#[derive(Debug, Default, Deserialize)]
pub struct SessionSettings {
    /// 会话Cookie加密密钥（base64编码的64字节；未设置时每次启动随机生成）
    pub secret: Option<String>,
}

/// 爬取配置设置
#[derive(Debug, Deserialize)]
pub struct CrawlerSettings {
    /// 单次抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求User-Agent
    pub user_agent: String,
    /// 记录到结果中的最大链接数
    pub max_links: usize,
}

/// YouTube元数据提取配置设置
#[derive(Debug, Deserialize)]
pub struct YoutubeSettings {
    /// oEmbed端点URL
    pub oembed_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 媒体工具配置设置
#[derive(Debug, Deserialize)]
pub struct MediaSettings {
    /// 语音识别模型
    pub transcribe_model: String,
    /// 语音合成模型
    pub speech_model: String,
    /// 语音合成音色
    pub voice: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.url", "sqlite://stockrs.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default crawler settings
            .set_default("crawler.timeout_secs", 30)?
            .set_default("crawler.user_agent", "Mozilla/5.0 (compatible; stockrs/0.1; +http://stockrs.dev)")?
            .set_default("crawler.max_links", 100)?
            // Default YouTube settings
            .set_default("youtube.oembed_url", "https://www.youtube.com/oembed")?
            .set_default("youtube.timeout_secs", 10)?
            // Default media settings
            .set_default("media.transcribe_model", "whisper-1")?
            .set_default("media.speech_model", "tts-1")?
            .set_default("media.voice", "alloy")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("STOCKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
