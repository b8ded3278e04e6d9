// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 库存条目实体
///
/// 每一行都归属于创建它的用户，所有读写都按归属用户过滤。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 条目唯一标识符
    pub id: i32,
    /// 归属用户ID
    pub user_id: i32,
    /// 条目名称
    pub name: String,
    /// 数量，始终非负
    pub quantity: i64,
    /// 分类
    pub category: String,
    /// 行业
    pub sector: String,
    /// 用途
    pub application: String,
    /// 创建时间
    pub date_added: DateTime<Utc>,
}

/// 待插入的库存条目
///
/// 表单和CSV导入都先解析成该结构再落库
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: i64,
    pub category: String,
    pub sector: String,
    pub application: String,
}
