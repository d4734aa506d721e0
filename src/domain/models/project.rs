// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 项目实体
///
/// 表示一个被监控的站点。项目及其所属账户由外部的
/// 账户/CRUD 层管理，核心流水线只读取它，从不修改。
/// `url` 字段是排名匹配时使用的规范 URL 片段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// 项目唯一标识符
    pub id: i32,
    /// 项目名称
    pub name: String,
    /// 规范 URL/域名片段，结果匹配依据此字段
    pub url: String,
    /// 暂停标志，暂停的项目不参与排名追踪
    pub is_paused: bool,
    /// 所属账户ID（外部账户层所有）
    pub owner_id: i32,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}
