// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

pub mod keyword_repository;
pub mod project_repository;
pub mod ranking_repository;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 约束冲突（唯一键等），对任务而言是终态错误
    #[error("Constraint conflict: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// 判断错误是否可通过重试恢复
    ///
    /// 约束冲突重试必然再次失败；其余数据库错误视为瞬态。
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::Database(_))
    }
}
