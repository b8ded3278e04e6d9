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

use clap::Parser;
use std::path::PathBuf;
use stockrs::config::settings::Settings;
use stockrs::infrastructure::media::synthesizer::Synthesizer;
use stockrs::utils::telemetry;
use tracing::info;

/// 把文本文件合成为语音
///
/// 独立于Web服务运行，结果写到文件系统
#[derive(Parser)]
#[command(name = "speak", about = "Synthesize speech from a text file")]
struct Args {
    /// Text file to read aloud
    input: PathBuf,

    /// Output path, defaults to the input with a .mp3 extension
    #[arg(long)]
    out: Option<PathBuf>,

    /// Speech model, overrides the configured default
    #[arg(long)]
    model: Option<String>,

    /// Voice name, overrides the configured default
    #[arg(long)]
    voice: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let args = Args::parse();

    let settings = Settings::new()?;
    let model = args.model.unwrap_or(settings.media.speech_model);
    let voice = args.voice.unwrap_or(settings.media.voice);

    let text = tokio::fs::read_to_string(&args.input).await?;

    let synthesizer = Synthesizer::new(&model, &voice)?;
    let output = args.out.unwrap_or_else(|| args.input.with_extension("mp3"));
    synthesizer.synthesize(&text, &output).await?;
    info!("Wrote audio to {}", output.display());

    Ok(())
}
