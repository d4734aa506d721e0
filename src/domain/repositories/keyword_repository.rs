// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword::Keyword;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 关键词仓库特质
#[async_trait]
pub trait KeywordRepository: Send + Sync {
    /// 根据ID查找关键词
    async fn find_by_id(&self, id: i32) -> Result<Option<Keyword>, RepositoryError>;

    /// 查找项目下所有未暂停的关键词
    ///
    /// 暂停过滤在存储层完成，派发器拿到的集合即扇出集合。
    async fn find_active_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<Keyword>, RepositoryError>;
}
