// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::KeywordJob;
use crate::domain::repositories::keyword_repository::KeywordRepository;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::ranking_repository::RankingRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::search::scraper::ScrapeError;
use crate::domain::services::ranking_recorder::RankingRecorder;
use crate::domain::services::result_matcher;
use crate::infrastructure::search::registry::EngineRegistry;
use crate::queue::job_queue::JobQueue;
use crate::utils::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// 任务执行错误
///
/// 按可恢复性分为两类：抓取失败和瞬态数据库错误可重试，
/// 未知引擎、引用缺失和约束冲突重试无意义，直接终态。
#[derive(Error, Debug)]
pub enum JobError {
    /// 未知搜索引擎标识符，配置/输入问题
    #[error("Unsupported search engine: {0}")]
    UnsupportedEngine(String),

    /// 关键词在派发后被删除
    #[error("Keyword {0} no longer exists")]
    KeywordMissing(i32),

    /// 项目在派发后被删除
    #[error("Project {0} no longer exists")]
    ProjectMissing(i32),

    /// 抓取失败（网络、超时、非2xx）
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    /// 存储错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl JobError {
    /// 判断错误是否可通过重试恢复
    pub fn is_retryable(&self) -> bool {
        match self {
            JobError::Scrape(_) => true,
            JobError::Repository(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// 单次任务执行的结果
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// 任务完成；`position` 为匹配顺位，未命中为 `None`
    Completed { position: Option<u32> },
    /// 可重试失败，已计划按退避时间重新入队
    Retried { next_attempt: u32 },
    /// 终态失败，任务被丢弃，仅留下日志
    Dropped,
}

/// 排名抓取工作器
///
/// 从队列拉取 KeywordJob 并串行执行
/// 解析引擎 → 加载引用 → 抓取 → 匹配 → 记录。
/// 任何失败都被限制在任务内部，从不向扫描调用方传播。
pub struct RankWorker<P, K, R, Q>
where
    P: ProjectRepository,
    K: KeywordRepository,
    R: RankingRepository,
    Q: JobQueue + 'static,
{
    project_repository: Arc<P>,
    keyword_repository: Arc<K>,
    recorder: RankingRecorder<R>,
    registry: Arc<EngineRegistry>,
    queue: Arc<Q>,
    retry_policy: RetryPolicy,
    worker_id: Uuid,
}

impl<P, K, R, Q> RankWorker<P, K, R, Q>
where
    P: ProjectRepository,
    K: KeywordRepository,
    R: RankingRepository,
    Q: JobQueue + 'static,
{
    /// 创建新的工作器实例
    pub fn new(
        project_repository: Arc<P>,
        keyword_repository: Arc<K>,
        ranking_repository: Arc<R>,
        registry: Arc<EngineRegistry>,
        queue: Arc<Q>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            project_repository,
            keyword_repository,
            recorder: RankingRecorder::new(ranking_repository),
            registry,
            queue,
            retry_policy,
            worker_id: Uuid::new_v4(),
        }
    }

    /// 运行工作器循环
    pub async fn run(&self) {
        info!("Rank worker {} started", self.worker_id);

        loop {
            match self.queue.dequeue().await {
                Ok(Some(job)) => {
                    self.process_job(job).await;
                }
                Ok(None) => {
                    // 出队已阻塞等待，空轮直接继续
                }
                Err(e) => {
                    error!("Error pulling job from queue: {}", e);
                    sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    /// 执行一个任务并处理其结果
    ///
    /// 未命中也是完成；可重试失败计划重新入队；其余丢弃。
    #[instrument(skip(self, job), fields(
        keyword_id = job.keyword_id,
        project_id = job.project_id,
        engine = %job.engine,
        attempt = job.attempt,
    ))]
    pub async fn process_job(&self, job: KeywordJob) -> JobOutcome {
        match self.execute(&job).await {
            Ok(position) => JobOutcome::Completed { position },
            Err(e) if e.is_retryable() => self.schedule_retry(job, e).await,
            Err(e) => {
                warn!(error = %e, "Job failed terminally, dropping");
                JobOutcome::Dropped
            }
        }
    }

    async fn execute(&self, job: &KeywordJob) -> Result<Option<u32>, JobError> {
        let scraper = self
            .registry
            .resolve(&job.engine)
            .ok_or_else(|| JobError::UnsupportedEngine(job.engine.clone()))?;

        let keyword = self
            .keyword_repository
            .find_by_id(job.keyword_id)
            .await?
            .ok_or(JobError::KeywordMissing(job.keyword_id))?;

        let project = self
            .project_repository
            .find_by_id(job.project_id)
            .await?
            .ok_or(JobError::ProjectMissing(job.project_id))?;

        let entries = scraper
            .scrape(&keyword.name, &job.region, job.device)
            .await?;

        match result_matcher::first_match(&entries, &project.url) {
            Some(entry) => {
                let ranking = self.recorder.record(job, entry).await?;
                Ok(Some(ranking.position))
            }
            None => {
                self.recorder.record_absence(job);
                Ok(None)
            }
        }
    }

    /// 计划一次重试
    ///
    /// 退避等待在独立任务中进行，工作器本身立即回到队列循环。
    async fn schedule_retry(&self, job: KeywordJob, error: JobError) -> JobOutcome {
        if !self.retry_policy.should_retry(job.attempt) {
            error!(
                error = %error,
                max_retries = self.retry_policy.max_retries,
                "Retries exhausted, dropping job"
            );
            return JobOutcome::Dropped;
        }

        let next = job.next_attempt();
        let backoff = self.retry_policy.calculate_backoff(next.attempt);
        warn!(
            error = %error,
            next_attempt = next.attempt,
            backoff_ms = backoff.as_millis() as u64,
            "Retryable failure, re-enqueueing after backoff"
        );

        let next_attempt = next.attempt;
        let queue = self.queue.clone();
        tokio::spawn(async move {
            sleep(backoff).await;
            if let Err(e) = queue.enqueue(&next).await {
                error!("Failed to re-enqueue job for retry: {}", e);
            }
        });

        JobOutcome::Retried { next_attempt }
    }
}
