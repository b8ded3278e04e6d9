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
use stockrs::infrastructure::media::transcriber::Transcriber;
use stockrs::utils::telemetry;
use tracing::info;

/// 把音频文件转写成文本
///
/// 独立于Web服务运行，结果写到文件系统
#[derive(Parser)]
#[command(name = "transcribe", about = "Transcribe an audio file to text")]
struct Args {
    /// Audio file to transcribe
    input: PathBuf,

    /// Output path, defaults to the input with a .txt extension
    #[arg(long)]
    out: Option<PathBuf>,

    /// Speech recognition model, overrides the configured default
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let args = Args::parse();

    let settings = Settings::new()?;
    let model = args
        .model
        .unwrap_or(settings.media.transcribe_model);

    let transcriber = Transcriber::new(model)?;
    let text = transcriber.transcribe(&args.input).await?;

    let output = args.out.unwrap_or_else(|| args.input.with_extension("txt"));
    tokio::fs::write(&output, &text).await?;
    info!("Wrote transcript to {}", output.display());

    Ok(())
}
