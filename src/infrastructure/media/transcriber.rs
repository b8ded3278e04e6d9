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

use super::{create_client, MediaError};
use async_openai::config::OpenAIConfig;
use async_openai::types::{AudioInput, CreateTranscriptionRequestArgs};
use async_openai::Client;
use std::path::Path;
use tracing::debug;

/// 语音识别客户端
///
/// 一次调用对应一次API请求，失败不重试
pub struct Transcriber {
    client: Client<OpenAIConfig>,
    model: String,
}

impl Transcriber {
    /// 创建新的语音识别客户端
    pub fn new(model: impl Into<String>) -> Result<Self, MediaError> {
        Ok(Self {
            client: create_client()?,
            model: model.into(),
        })
    }

    /// 转写一个音频文件，返回纯文本
    pub async fn transcribe(&self, audio_path: &Path) -> Result<String, MediaError> {
        debug!("Transcribing {}", audio_path.display());

        let file_bytes = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(file_name, file_bytes))
            .model(&self.model)
            .build()
            .map_err(|e| MediaError::ToolFailed(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| MediaError::ToolFailed(format!("Transcription API error: {}", e)))?;

        Ok(response.text)
    }
}
