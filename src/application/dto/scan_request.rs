// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::DeviceType;
use crate::domain::models::scan_request::ScanRequest;
use serde::Deserialize;
use validator::Validate;

/// 扫描请求DTO
///
/// 项目ID来自路径参数，请求体只携带扫描维度。
#[derive(Debug, Deserialize, Validate)]
pub struct ScanRequestDto {
    /// 请求的搜索引擎标识符集合
    #[validate(length(min = 1, message = "search_engines cannot be empty"))]
    pub search_engines: Vec<String>,
    /// 区域代码
    #[validate(length(min = 1, message = "region cannot be empty"))]
    pub region: String,
    /// 设备类型
    pub device: DeviceType,
}

impl ScanRequestDto {
    /// 结合路径中的项目ID转换为领域请求
    pub fn into_scan_request(self, project_id: i32) -> ScanRequest {
        ScanRequest {
            project_id,
            search_engines: self.search_engines,
            region: self.region,
            device: self.device,
        }
    }
}
