// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword::Keyword;
use crate::domain::repositories::keyword_repository::KeywordRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::keyword as keyword_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 关键词仓库实现
pub struct KeywordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl KeywordRepositoryImpl {
    /// 创建新的关键词仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: keyword_entity::Model) -> Keyword {
    Keyword {
        id: model.id,
        project_id: model.project_id,
        name: model.name,
        is_paused: model.is_paused,
        created_at: model.created_at,
    }
}

#[async_trait]
impl KeywordRepository for KeywordRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Keyword>, RepositoryError> {
        let model = keyword_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }

    async fn find_active_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<Keyword>, RepositoryError> {
        let models = keyword_entity::Entity::find()
            .filter(keyword_entity::Column::ProjectId.eq(project_id))
            .filter(keyword_entity::Column::IsPaused.eq(false))
            .order_by_asc(keyword_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }
}
