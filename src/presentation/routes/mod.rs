// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::engines::traits::{PageFetcher, VideoExtractor};
use crate::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use crate::infrastructure::repositories::inventory_repo_impl::InventoryRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::infrastructure::repositories::youtube_repo_impl::YoutubeRepositoryImpl;
use crate::presentation::handlers::{
    auth_handler, crawl_handler, inventory_handler, youtube_handler,
};
use crate::presentation::middleware::session_middleware::{session_middleware, SessionState};
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由装配所需的共享组件
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub session: SessionState,
    pub user_repo: Arc<UserRepositoryImpl>,
    pub inventory_repo: Arc<InventoryRepositoryImpl>,
    pub crawl_repo: Arc<CrawlRepositoryImpl>,
    pub youtube_repo: Arc<YoutubeRepositoryImpl>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub extractor: Arc<dyn VideoExtractor>,
}

/// 创建应用路由
///
/// 公开路由不做会话校验；受保护路由全部经过会话中间件
pub fn build_router(ctx: AppContext) -> Router {
    let public_routes = Router::new()
        .route("/", get(auth_handler::landing))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/register", get(auth_handler::register_form))
        .route(
            "/register",
            post(auth_handler::register::<UserRepositoryImpl>),
        )
        .route("/login", get(auth_handler::login_form))
        .route("/login", post(auth_handler::login::<UserRepositoryImpl>))
        .route("/logout", get(auth_handler::logout));

    let protected_routes = Router::new()
        .route(
            "/dashboard",
            get(inventory_handler::dashboard::<InventoryRepositoryImpl>),
        )
        .route(
            "/add",
            post(inventory_handler::add_item::<InventoryRepositoryImpl>),
        )
        .route(
            "/upload_csv",
            post(inventory_handler::upload_csv::<InventoryRepositoryImpl>),
        )
        .route(
            "/update_quantity/{id}",
            put(inventory_handler::update_quantity::<InventoryRepositoryImpl>),
        )
        .route(
            "/delete_item/{id}",
            delete(inventory_handler::delete_item::<InventoryRepositoryImpl>),
        )
        .route("/crawl", post(crawl_handler::crawl::<CrawlRepositoryImpl>))
        .route(
            "/crawl_history",
            get(crawl_handler::crawl_history::<CrawlRepositoryImpl>),
        )
        .route(
            "/crawl-details/{id}",
            get(crawl_handler::crawl_details::<CrawlRepositoryImpl>),
        )
        .route(
            "/add_youtube",
            post(youtube_handler::add_youtube::<YoutubeRepositoryImpl>),
        )
        .route(
            "/youtube",
            get(youtube_handler::list_videos::<YoutubeRepositoryImpl>),
        )
        .route(
            "/profile",
            get(auth_handler::profile::<UserRepositoryImpl>),
        )
        .layer(axum::middleware::from_fn_with_state(
            ctx.session.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(ctx.user_repo))
        .layer(Extension(ctx.inventory_repo))
        .layer(Extension(ctx.crawl_repo))
        .layer(Extension(ctx.youtube_repo))
        .layer(Extension(ctx.fetcher))
        .layer(Extension(ctx.extractor))
        .layer(Extension(ctx.session))
        .layer(Extension(ctx.settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
