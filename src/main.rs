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

use std::sync::Arc;
use std::time::Duration;
use stockrs::config::settings::Settings;
use stockrs::engines::http_fetcher::HttpFetcher;
use stockrs::engines::oembed_extractor::OembedExtractor;
use stockrs::engines::traits::{PageFetcher, VideoExtractor};
use stockrs::infrastructure::database::connection;
use stockrs::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use stockrs::infrastructure::repositories::inventory_repo_impl::InventoryRepositoryImpl;
use stockrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use stockrs::infrastructure::repositories::youtube_repo_impl::YoutubeRepositoryImpl;
use stockrs::presentation::middleware::session_middleware::{session_key, SessionState};
use stockrs::presentation::routes::{build_router, AppContext};
use tokio::net::TcpListener;
use tracing::info;

use stockrs::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting stockrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Session cookie key
    let key = session_key(settings.session.secret.as_deref())?;
    if settings.session.secret.is_none() {
        info!("No session secret configured, sessions will not survive restarts");
    }
    let session = SessionState {
        db: db.clone(),
        key,
    };

    // 5. Initialize repositories
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let inventory_repo = Arc::new(InventoryRepositoryImpl::new(db.clone()));
    let crawl_repo = Arc::new(CrawlRepositoryImpl::new(db.clone()));
    let youtube_repo = Arc::new(YoutubeRepositoryImpl::new(db.clone()));

    // 6. Initialize external collaborators
    let fetcher: Arc<dyn PageFetcher> =
        Arc::new(HttpFetcher::new(settings.crawler.user_agent.clone()));
    let extractor: Arc<dyn VideoExtractor> = Arc::new(OembedExtractor::new(
        settings.youtube.oembed_url.clone(),
        Duration::from_secs(settings.youtube.timeout_secs),
    ));

    // 7. Start HTTP server
    let app = build_router(AppContext {
        settings: settings.clone(),
        session,
        user_repo,
        inventory_repo,
        crawl_repo,
        youtube_repo,
        fetcher,
        extractor,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
