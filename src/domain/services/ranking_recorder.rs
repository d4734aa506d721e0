// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::KeywordJob;
use crate::domain::models::ranking::KeywordRanking;
use crate::domain::models::search_result::SearchResultEntry;
use crate::domain::repositories::ranking_repository::RankingRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::info;

/// 排名记录器
///
/// 一次任务执行最多写入一行：匹配成功写入排名记录，
/// 未匹配只留下日志信号，不落库。
pub struct RankingRecorder<R: RankingRepository> {
    /// 排名仓库
    repository: Arc<R>,
}

impl<R: RankingRepository> RankingRecorder<R> {
    /// 创建新的排名记录器实例
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 持久化一次成功匹配
    ///
    /// # 参数
    ///
    /// * `job` - 任务上下文（关键词、引擎、区域、设备）
    /// * `entry` - 匹配到的结果条目
    ///
    /// # 返回值
    ///
    /// * `Ok(KeywordRanking)` - 已写入的排名记录
    /// * `Err(RepositoryError)` - 写入失败；约束冲突为终态错误
    pub async fn record(
        &self,
        job: &KeywordJob,
        entry: &SearchResultEntry,
    ) -> Result<KeywordRanking, RepositoryError> {
        let ranking = KeywordRanking::from_match(job, entry);
        let id = self.repository.insert(&ranking).await?;

        info!(
            ranking_id = id,
            keyword_id = job.keyword_id,
            project_id = job.project_id,
            engine = %job.engine,
            position = ranking.position,
            "Recorded ranking position"
        );

        Ok(ranking)
    }

    /// 记录一次未命中的检查
    ///
    /// 未命中是正常业务结果，只产生可观测信号，不写任何行。
    pub fn record_absence(&self, job: &KeywordJob) {
        info!(
            keyword_id = job.keyword_id,
            project_id = job.project_id,
            engine = %job.engine,
            region = %job.region,
            "Project URL not found in results, no ranking recorded"
        );
    }
}
