// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ranking::KeywordRanking;
use crate::domain::repositories::ranking_repository::RankingRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::keyword_ranking as ranking_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 排名仓库实现
pub struct RankingRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RankingRepositoryImpl {
    /// 创建新的排名仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RankingRepository for RankingRepositoryImpl {
    async fn insert(&self, ranking: &KeywordRanking) -> Result<i32, RepositoryError> {
        let active_model = ranking_entity::ActiveModel {
            id: NotSet,
            keyword_id: Set(ranking.keyword_id),
            project_id: Set(ranking.project_id),
            search_engine: Set(ranking.search_engine.clone()),
            region: Set(ranking.region.clone()),
            device: Set(ranking.device.to_string()),
            position: Set(ranking.position as i32),
            title: Set(ranking.title.clone()),
            url: Set(ranking.url.clone()),
            snippet: Set(ranking.snippet.clone()),
            checked_at: Set(ranking.checked_at.into()),
        };

        let result = ranking_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await;

        match result {
            Ok(inserted) => Ok(inserted.last_insert_id),
            Err(e) => {
                // 唯一键/约束冲突重试必然失败，单独归类为终态错误
                let message = e.to_string();
                if message.contains("duplicate key") || message.contains("UNIQUE constraint") {
                    Err(RepositoryError::Conflict(message))
                } else {
                    Err(RepositoryError::Database(e))
                }
            }
        }
    }
}
