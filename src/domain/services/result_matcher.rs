// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResultEntry;

/// 在有序结果集中查找项目 URL 的首次出现
///
/// 按解析顺序扫描，返回第一个 URL 包含 `url_fragment` 的条目。
/// 匹配是大小写敏感的裸子串测试，不对协议、www 前缀、尾部斜杠
/// 或查询串做任何归一化。未命中返回 `None`，这是正常的业务结果
/// 而不是错误。
pub fn first_match<'a>(
    entries: &'a [SearchResultEntry],
    url_fragment: &str,
) -> Option<&'a SearchResultEntry> {
    entries.iter().find(|entry| entry.url.contains(url_fragment))
}
