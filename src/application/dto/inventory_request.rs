// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 表单提交的新条目
///
/// `quantity`保持字符串形态，解析和非负校验在用例层完成，
/// 与CSV导入共用同一套规则
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct AddItemDto {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub application: String,
}

/// 数量更新请求，表单字段名沿用`value`
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateQuantityDto {
    pub value: i64,
}
