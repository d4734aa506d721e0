// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::{DeviceType, KeywordJob};
use crate::domain::models::search_result::SearchResultEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 关键词排名记录
///
/// 一次成功匹配的持久化结果。每次扫描追加一条历史行，
/// 从不更新已有行；未匹配的扫描不产生任何行。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRanking {
    /// 关键词ID
    pub keyword_id: i32,
    /// 项目ID
    pub project_id: i32,
    /// 搜索引擎标识符
    pub search_engine: String,
    /// 区域代码
    pub region: String,
    /// 设备类型
    pub device: DeviceType,
    /// 匹配条目的页面顺位（1起始）
    pub position: u32,
    /// 匹配条目标题
    pub title: String,
    /// 匹配条目链接
    pub url: String,
    /// 匹配条目摘要
    pub snippet: String,
    /// 检查时间
    pub checked_at: DateTime<Utc>,
}

impl KeywordRanking {
    /// 从任务上下文和匹配条目构建排名记录
    pub fn from_match(job: &KeywordJob, entry: &SearchResultEntry) -> Self {
        Self {
            keyword_id: job.keyword_id,
            project_id: job.project_id,
            search_engine: job.engine.clone(),
            region: job.region.clone(),
            device: job.device,
            position: entry.position,
            title: entry.title.clone(),
            url: entry.url.clone(),
            snippet: entry.snippet.clone(),
            checked_at: Utc::now(),
        }
    }
}
