// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ranking::KeywordRanking;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// 排名仓库特质
///
/// 排名表是追加写入的历史表，每次成功匹配插入一行，
/// 从不更新或删除。
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// 插入一条排名记录，返回持久化后的行ID
    async fn insert(&self, ranking: &KeywordRanking) -> Result<i32, RepositoryError>;
}
