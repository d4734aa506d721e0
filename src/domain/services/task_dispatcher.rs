// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::KeywordJob;
use crate::domain::models::scan_request::ScanRequest;
use crate::domain::repositories::keyword_repository::KeywordRepository;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::search::registry::EngineRegistry;
use crate::queue::job_queue::{JobQueue, QueueError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// 派发错误类型
#[derive(Error, Debug)]
pub enum DispatchError {
    /// 项目不存在，派发阶段唯一对调用方可见的失败
    #[error("Project {0} not found")]
    ProjectNotFound(i32),

    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// 队列错误
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),
}

/// 派发回执
///
/// 只确认提交发生，不携带任何任务结果。
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReceipt {
    /// 项目ID
    pub project_id: i32,
    /// 已提交的任务数量
    pub jobs_submitted: usize,
}

/// 扫描任务派发器
///
/// 把一次项目扫描请求展开为 (未暂停关键词 × 可解析引擎) 的
/// 叉积，每个组合作为一个独立的 KeywordJob 入队。入队完成即
/// 返回，任务结果只能通过排名表或日志异步观察。
pub struct TaskDispatcher<P, K, Q>
where
    P: ProjectRepository,
    K: KeywordRepository,
    Q: JobQueue,
{
    project_repository: Arc<P>,
    keyword_repository: Arc<K>,
    queue: Arc<Q>,
    registry: Arc<EngineRegistry>,
}

impl<P, K, Q> TaskDispatcher<P, K, Q>
where
    P: ProjectRepository,
    K: KeywordRepository,
    Q: JobQueue,
{
    /// 创建新的派发器实例
    pub fn new(
        project_repository: Arc<P>,
        keyword_repository: Arc<K>,
        queue: Arc<Q>,
        registry: Arc<EngineRegistry>,
    ) -> Self {
        Self {
            project_repository,
            keyword_repository,
            queue,
            registry,
        }
    }

    /// 派发一次扫描请求
    ///
    /// # 参数
    ///
    /// * `request` - 扫描请求
    ///
    /// # 返回值
    ///
    /// * `Ok(DispatchReceipt)` - 提交回执
    /// * `Err(DispatchError)` - 项目缺失或基础设施错误
    pub async fn dispatch(&self, request: ScanRequest) -> Result<DispatchReceipt, DispatchError> {
        let project = self
            .project_repository
            .find_by_id(request.project_id)
            .await?
            .ok_or(DispatchError::ProjectNotFound(request.project_id))?;

        // 未知引擎在派发阶段跳过，不产生任何队列消息
        let engines: Vec<&String> = request
            .search_engines
            .iter()
            .filter(|identifier| {
                if self.registry.resolve(identifier).is_some() {
                    true
                } else {
                    warn!(
                        project_id = project.id,
                        engine = %identifier,
                        "Unsupported search engine in scan request, skipping"
                    );
                    false
                }
            })
            .collect();

        let keywords = self
            .keyword_repository
            .find_active_by_project(project.id)
            .await?;

        let mut jobs_submitted = 0;
        for keyword in &keywords {
            for engine in &engines {
                let job = KeywordJob::new(
                    keyword.id,
                    project.id,
                    (*engine).clone(),
                    request.region.clone(),
                    request.device,
                );
                self.queue.enqueue(&job).await?;
                jobs_submitted += 1;
            }
        }

        info!(
            project_id = project.id,
            keywords = keywords.len(),
            engines = engines.len(),
            jobs_submitted,
            "Scan dispatched"
        );

        Ok(DispatchReceipt {
            project_id: project.id,
            jobs_submitted,
        })
    }
}
