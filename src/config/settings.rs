// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、Redis、服务器、代理、工作器和重试等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// Redis配置
    pub redis: RedisSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 转发代理配置
    pub proxy: ProxySettings,
    /// 工作器配置
    pub workers: WorkerSettings,
    /// 重试配置
    pub retry: RetrySettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// Redis配置设置
#[derive(Debug, Deserialize)]
pub struct RedisSettings {
    /// Redis连接URL
    pub url: String,
    /// 关键词任务队列键名
    pub queue_key: String,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 转发代理配置设置
///
/// 抓取请求经由此代理出网。凭据在构造抓取客户端时注入，
/// 抓取器本身不读进程环境。
#[derive(Debug, Deserialize)]
pub struct ProxySettings {
    /// 是否启用代理（关闭时直连，用于本地调试）
    pub enabled: bool,
    /// 代理端点 host:port
    pub endpoint: String,
    /// 代理用户名
    pub username: String,
    /// 代理密码
    pub password: String,
    /// 是否接受无效TLS证书
    ///
    /// 针对代理端点关闭证书校验。默认关闭；只有在明确信任
    /// 前置解锁代理会重签证书时才应打开。
    pub accept_invalid_certs: bool,
    /// 单次抓取请求超时（秒）
    pub timeout_secs: u64,
}

/// 工作器配置设置
#[derive(Debug, Deserialize)]
pub struct WorkerSettings {
    /// 并发工作器数量
    pub count: usize,
}

/// 重试配置设置
#[derive(Debug, Deserialize)]
pub struct RetrySettings {
    /// 最大重试次数（不含首次执行）
    pub max_retries: u32,
    /// 初始退避时间（毫秒）
    pub initial_backoff_ms: u64,
    /// 最大退避时间（毫秒）
    pub max_backoff_ms: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default queue settings
            .set_default("redis.queue_key", "rankrs:keyword_jobs")?
            // Default proxy settings
            .set_default("proxy.enabled", true)?
            .set_default("proxy.endpoint", "unblock.oxylabs.io:60000")?
            .set_default("proxy.username", "")?
            .set_default("proxy.password", "")?
            .set_default("proxy.accept_invalid_certs", false)?
            .set_default("proxy.timeout_secs", 30)?
            // Default worker settings
            .set_default("workers.count", 5)?
            // Default retry settings
            .set_default("retry.max_retries", 3)?
            .set_default("retry.initial_backoff_ms", 1000)?
            .set_default("retry.max_backoff_ms", 60000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("RANKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
