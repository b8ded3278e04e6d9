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
use async_openai::types::{CreateSpeechRequestArgs, SpeechModel, Voice};
use async_openai::Client;
use std::path::Path;
use tracing::debug;

/// 语音合成客户端
pub struct Synthesizer {
    client: Client<OpenAIConfig>,
    model: SpeechModel,
    voice: Voice,
}

impl Synthesizer {
    /// 创建新的语音合成客户端
    ///
    /// 未知的音色名返回InvalidInput
    pub fn new(model: &str, voice: &str) -> Result<Self, MediaError> {
        let model = match model {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        };

        let voice = match voice.to_ascii_lowercase().as_str() {
            "alloy" => Voice::Alloy,
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "shimmer" => Voice::Shimmer,
            other => {
                return Err(MediaError::InvalidInput(format!(
                    "Unknown voice: {}",
                    other
                )))
            }
        };

        Ok(Self {
            client: create_client()?,
            model,
            voice,
        })
    }

    /// 合成语音并写入目标文件
    pub async fn synthesize(&self, text: &str, output_path: &Path) -> Result<(), MediaError> {
        if text.trim().is_empty() {
            return Err(MediaError::InvalidInput(
                "Nothing to synthesize: input text is empty".to_string(),
            ));
        }

        debug!("Synthesizing {} characters", text.len());

        let request = CreateSpeechRequestArgs::default()
            .input(text)
            .model(self.model.clone())
            .voice(self.voice.clone())
            .build()
            .map_err(|e| MediaError::ToolFailed(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .audio()
            .speech(request)
            .await
            .map_err(|e| MediaError::ToolFailed(format!("Speech API error: {}", e)))?;

        tokio::fs::write(output_path, &response.bytes).await?;
        Ok(())
    }
}
