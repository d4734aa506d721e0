// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::project::Project;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 项目仓库特质
///
/// 项目数据归账户层所有，核心流水线只读。
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 根据ID查找项目
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, RepositoryError>;
}
