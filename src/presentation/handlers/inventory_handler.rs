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

use axum::{
    extract::{Extension, Multipart, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::inventory_request::{AddItemDto, UpdateQuantityDto},
        use_cases::inventory_use_case::{InventoryUseCase, InventoryUseCaseError},
    },
    domain::{
        models::inventory_item::InventoryItem,
        repositories::inventory_repository::InventoryRepository,
    },
    presentation::{
        flash,
        middleware::session_middleware::{CurrentUser, SessionState},
    },
};

/// 面板视图
#[derive(Debug, Serialize)]
struct DashboardView {
    username: String,
    flash: Option<String>,
    items: Vec<InventoryItem>,
}

/// 库存面板
///
/// 只列出当前会话用户自己的条目
pub async fn dashboard<IR>(
    Extension(inventory_repo): Extension<Arc<IR>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    IR: InventoryRepository + 'static,
{
    let use_case = InventoryUseCase::new(inventory_repo);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());
    let (message, jar) = flash::take(jar);

    match use_case.list_items(current_user.id).await {
        Ok(items) => (
            jar,
            Json(DashboardView {
                username: current_user.username,
                flash: message,
                items,
            }),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 添加库存条目
pub async fn add_item<IR>(
    Extension(inventory_repo): Extension<Arc<IR>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    Form(payload): Form<AddItemDto>,
) -> impl IntoResponse
where
    IR: InventoryRepository + 'static,
{
    let use_case = InventoryUseCase::new(inventory_repo);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    match use_case.add_item(current_user.id, payload).await {
        Ok(_) => {
            let jar = flash::set(jar, "Item successfully added!");
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(InventoryUseCaseError::ValidationError(msg)) => {
            let jar = flash::set(jar, &msg);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// CSV批量导入
///
/// multipart字段名为`file`，文件必须以`.csv`结尾。
/// 坏行跳过计数，结果写入闪现消息。
pub async fn upload_csv<IR>(
    Extension(inventory_repo): Extension<Arc<IR>>,
    Extension(session): Extension<SessionState>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    IR: InventoryRepository + 'static,
{
    let use_case = InventoryUseCase::new(inventory_repo);
    let jar = PrivateCookieJar::from_headers(&headers, session.key.clone());

    let mut csv_bytes = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let is_csv = field
                    .file_name()
                    .map(|name| name.ends_with(".csv"))
                    .unwrap_or(false);
                if !is_csv {
                    let jar = flash::set(jar, "Please upload a CSV file");
                    return (jar, Redirect::to("/dashboard")).into_response();
                }
                match field.bytes().await {
                    Ok(bytes) => {
                        csv_bytes = Some(bytes);
                        break;
                    }
                    Err(e) => {
                        let jar = flash::set(jar, &format!("Upload failed: {}", e));
                        return (jar, Redirect::to("/dashboard")).into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                let jar = flash::set(jar, &format!("Upload failed: {}", e));
                return (jar, Redirect::to("/dashboard")).into_response();
            }
        }
    }

    let Some(csv_bytes) = csv_bytes else {
        let jar = flash::set(jar, "No file selected");
        return (jar, Redirect::to("/dashboard")).into_response();
    };

    match use_case.import_csv(current_user.id, &csv_bytes).await {
        Ok(summary) => {
            let jar = flash::set(
                jar,
                &format!(
                    "Successfully imported {} items. {} items failed.",
                    summary.imported, summary.failed
                ),
            );
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 更新条目数量
///
/// API动词，直接返回状态码加文本，不走闪现消息
pub async fn update_quantity<IR>(
    Extension(inventory_repo): Extension<Arc<IR>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(item_id): Path<i32>,
    Form(payload): Form<UpdateQuantityDto>,
) -> impl IntoResponse
where
    IR: InventoryRepository + 'static,
{
    let use_case = InventoryUseCase::new(inventory_repo);

    match use_case
        .update_quantity(current_user.id, item_id, payload.value)
        .await
    {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, msg).into_response()
        }
    }
}

/// 删除条目
pub async fn delete_item<IR>(
    Extension(inventory_repo): Extension<Arc<IR>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(item_id): Path<i32>,
) -> impl IntoResponse
where
    IR: InventoryRepository + 'static,
{
    let use_case = InventoryUseCase::new(inventory_repo);

    match use_case.delete_item(current_user.id, item_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, msg).into_response()
        }
    }
}

impl From<InventoryUseCaseError> for (StatusCode, String) {
    fn from(err: InventoryUseCaseError) -> Self {
        match err {
            InventoryUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            InventoryUseCaseError::NotFound => {
                (StatusCode::NOT_FOUND, "Item not found".to_string())
            }
            InventoryUseCaseError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
