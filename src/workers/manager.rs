// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::keyword_repository::KeywordRepository;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::ranking_repository::RankingRepository;
use crate::infrastructure::search::registry::EngineRegistry;
use crate::queue::job_queue::JobQueue;
use crate::utils::retry_policy::RetryPolicy;
use crate::workers::rank_worker::RankWorker;
use std::sync::Arc;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 工作管理器
pub struct WorkerManager<P, K, R, Q>
where
    P: ProjectRepository + 'static,
    K: KeywordRepository + 'static,
    R: RankingRepository + 'static,
    Q: JobQueue + 'static,
{
    project_repository: Arc<P>,
    keyword_repository: Arc<K>,
    ranking_repository: Arc<R>,
    registry: Arc<EngineRegistry>,
    queue: Arc<Q>,
    retry_policy: RetryPolicy,
    handles: Vec<JoinHandle<()>>,
}

impl<P, K, R, Q> WorkerManager<P, K, R, Q>
where
    P: ProjectRepository + 'static,
    K: KeywordRepository + 'static,
    R: RankingRepository + 'static,
    Q: JobQueue + 'static,
{
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
            ranking_repository,
            registry,
            queue,
            retry_policy,
            handles: Vec::new(),
        }
    }

    /// 启动工作进程
    ///
    /// 创建并启动指定数量的工作进程
    ///
    /// # 参数
    ///
    /// * `count` - 要启动的工作进程数量
    pub async fn start_workers(&mut self, count: usize) {
        for _ in 0..count {
            let worker = RankWorker::new(
                self.project_repository.clone(),
                self.keyword_repository.clone(),
                self.ranking_repository.clone(),
                self.registry.clone(),
                self.queue.clone(),
                self.retry_policy.clone(),
            );

            // Worker loops run on their own tasks so spawning never blocks
            // the main thread.
            let handle = tokio::spawn(async move {
                worker.run().await;
            });
            self.handles.push(handle);
        }

        info!("Started {} rank workers", count);
    }

    /// 等待关闭信号并关闭工作进程
    ///
    /// 监听关闭信号并优雅地关闭所有工作进程
    pub async fn wait_for_shutdown(&mut self) {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(err) => error!("Unable to listen for shutdown signal: {}", err),
        }

        info!("Shutting down workers...");
        for handle in &self.handles {
            handle.abort();
        }

        info!("Workers shut down successfully");
    }
}
