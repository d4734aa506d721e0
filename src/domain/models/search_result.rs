// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索结果条目
///
/// 解析一页（或多页拼接）结果后得到的临时结构。
/// `position` 为 1 起始的页面顺位，缺少标题或链接的条目
/// 在解析阶段被跳过，但其顺位仍被占用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    /// 页面内顺位（1起始）
    pub position: u32,
    /// 结果链接
    pub url: String,
    /// 结果标题
    pub title: String,
    /// 摘要，允许为空
    pub snippet: String,
}

impl SearchResultEntry {
    pub fn new(position: u32, url: String, title: String, snippet: String) -> Self {
        Self {
            position,
            url,
            title,
            snippet,
        }
    }
}
