// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 关键词实体
///
/// 一个被追踪的搜索词，归属于唯一的项目。
/// 暂停的关键词在任务扇出时被过滤，不产生任何抓取任务。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    /// 关键词唯一标识符
    pub id: i32,
    /// 所属项目ID
    pub project_id: i32,
    /// 搜索词文本
    pub name: String,
    /// 暂停标志
    pub is_paused: bool,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}
