// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::project::Project;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::project as project_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 项目仓库实现
pub struct ProjectRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryImpl {
    /// 创建新的项目仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: project_entity::Model) -> Project {
    Project {
        id: model.id,
        name: model.name,
        url: model.url,
        is_paused: model.is_paused,
        owner_id: model.owner_id,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, RepositoryError> {
        let model = project_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }
}
