// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::DeviceType;
use serde::{Deserialize, Serialize};

/// 扫描请求
///
/// TaskDispatcher 的瞬态输入：一个项目在一组搜索引擎、
/// 一个区域和一种设备上的排名检查请求。派发完成后即丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// 项目ID
    pub project_id: i32,
    /// 请求的搜索引擎标识符集合（非空）
    pub search_engines: Vec<String>,
    /// 区域代码
    pub region: String,
    /// 设备类型
    pub device: DeviceType,
}
