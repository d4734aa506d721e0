// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 设备类型枚举
///
/// 排名追踪按设备维度区分，记录在每条排名行中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// 桌面端
    #[default]
    Desktop,
    /// 移动端
    Mobile,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeviceType::Desktop => write!(f, "desktop"),
            DeviceType::Mobile => write!(f, "mobile"),
        }
    }
}

impl FromStr for DeviceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(DeviceType::Desktop),
            "mobile" => Ok(DeviceType::Mobile),
            _ => Err(()),
        }
    }
}

/// 关键词抓取任务
///
/// 队列中的最小工作单元，对应扫描请求叉积中的一个
/// (关键词 × 搜索引擎) 组合。任务本身只携带引用和重试计数，
/// 关键词与项目在执行时从存储加载，二者缺失即为终态失败。
/// 序列化格式即队列消息格式，字段名是对外契约的一部分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordJob {
    /// 关键词ID
    pub keyword_id: i32,
    /// 项目ID
    pub project_id: i32,
    /// 搜索引擎标识符
    pub engine: String,
    /// 区域代码
    pub region: String,
    /// 设备类型
    pub device: DeviceType,
    /// 已尝试次数，首次执行为0
    #[serde(default)]
    pub attempt: u32,
}

impl KeywordJob {
    /// 创建一个新的关键词任务
    pub fn new(
        keyword_id: i32,
        project_id: i32,
        engine: String,
        region: String,
        device: DeviceType,
    ) -> Self {
        Self {
            keyword_id,
            project_id,
            engine,
            region,
            device,
            attempt: 0,
        }
    }

    /// 生成重试任务副本，尝试计数加一
    pub fn next_attempt(&self) -> Self {
        Self {
            attempt: self.attempt + 1,
            ..self.clone()
        }
    }
}
