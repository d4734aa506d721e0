// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::KeywordJob;
use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// Redis错误
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// 消息编解码错误
    #[error("Malformed job payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// 任务队列特质
///
/// 至少一次投递的关键词任务队列。重试通过带上调后的
/// attempt 计数重新入队实现，与底层队列技术解耦。
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// 入队任务
    async fn enqueue(&self, job: &KeywordJob) -> Result<(), QueueError>;

    /// 出队任务
    ///
    /// 阻塞有界等待，队列为空时返回 `Ok(None)`。
    async fn dequeue(&self) -> Result<Option<KeywordJob>, QueueError>;
}

/// Redis任务队列实现
///
/// 消息体为 KeywordJob 的 JSON 序列化（字段即 §队列消息契约），
/// LPUSH 入队、BRPOP 出队构成先进先出。
pub struct RedisJobQueue {
    /// Redis客户端
    client: redis::Client,
    /// 队列键名
    queue_key: String,
}

/// 出队阻塞等待时间（秒）
const DEQUEUE_BLOCK_SECS: f64 = 1.0;

impl RedisJobQueue {
    /// 创建新的Redis任务队列实例
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    /// * `queue_key` - 队列键名
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisJobQueue)` - 队列实例
    /// * `Err(QueueError)` - 客户端创建失败
    pub fn new(redis_url: &str, queue_key: impl Into<String>) -> Result<Self, QueueError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self {
            client,
            queue_key: queue_key.into(),
        })
    }
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn enqueue(&self, job: &KeywordJob) -> Result<(), QueueError> {
        let payload = serde_json::to_string(job)?;
        let mut con = self.client.get_multiplexed_async_connection().await?;
        con.lpush::<_, _, ()>(&self.queue_key, payload).await?;
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<KeywordJob>, QueueError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let popped: Option<(String, String)> =
            con.brpop(&self.queue_key, DEQUEUE_BLOCK_SECS).await?;

        match popped {
            Some((_key, payload)) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<T: JobQueue + ?Sized> JobQueue for std::sync::Arc<T> {
    async fn enqueue(&self, job: &KeywordJob) -> Result<(), QueueError> {
        (**self).enqueue(job).await
    }

    async fn dequeue(&self) -> Result<Option<KeywordJob>, QueueError> {
        (**self).dequeue().await
    }
}
