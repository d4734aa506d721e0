// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::scan_request::ScanRequestDto,
    domain::{
        repositories::{
            keyword_repository::KeywordRepository, project_repository::ProjectRepository,
        },
        services::task_dispatcher::{DispatchError, TaskDispatcher},
    },
    queue::job_queue::JobQueue,
};

/// 处理扫描请求
///
/// 202 只表示派发已入队；单个关键词的检查结果只能通过
/// 排名表或日志异步观察，这里不等待任何任务完成。
///
/// # 参数
///
/// * `project_id` - 路径中的项目ID
/// * `dispatcher` - 任务派发器实例
/// * `payload` - 扫描请求数据
///
/// # 返回值
///
/// * `202 Accepted` - 派发成功
/// * `400 Bad Request` - 请求校验失败
/// * `404 Not Found` - 项目不存在
pub async fn scan_project<P, K, Q>(
    Path(project_id): Path<i32>,
    Extension(dispatcher): Extension<Arc<TaskDispatcher<P, K, Q>>>,
    Json(payload): Json<ScanRequestDto>,
) -> impl IntoResponse
where
    P: ProjectRepository + 'static,
    K: KeywordRepository + 'static,
    Q: JobQueue + 'static,
{
    if let Err(e) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response();
    }

    let request = payload.into_scan_request(project_id);
    match dispatcher.dispatch(request).await {
        Ok(receipt) => (
            StatusCode::ACCEPTED,
            Json(json!({
                "message": "Rank tracking started",
                "project_id": receipt.project_id,
                "jobs_submitted": receipt.jobs_submitted,
            })),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<DispatchError> for (StatusCode, String) {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::ProjectNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Project {} not found", id))
            }
            DispatchError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            DispatchError::Queue(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
