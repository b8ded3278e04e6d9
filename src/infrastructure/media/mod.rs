// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;
use thiserror::Error;

pub mod synthesizer;
pub mod transcriber;

/// 媒体API调用的默认超时（5分钟）
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// 媒体工具错误类型
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 创建带超时的OpenAI客户端
///
/// API密钥从`OPENAI_API_KEY`环境变量读取
pub fn create_client() -> Result<Client<OpenAIConfig>, MediaError> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(|e| MediaError::ToolFailed(e.to_string()))?;

    Ok(Client::with_config(OpenAIConfig::default()).with_http_client(http_client))
}
