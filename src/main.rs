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

use axum::Extension;
use axum::{
    routing::{get, post},
    Router,
};
use rankrs::config::settings::Settings;
use rankrs::domain::services::task_dispatcher::TaskDispatcher;
use rankrs::infrastructure::database::connection;
use rankrs::infrastructure::proxy::ProxyClient;
use rankrs::infrastructure::repositories::keyword_repo_impl::KeywordRepositoryImpl;
use rankrs::infrastructure::repositories::project_repo_impl::ProjectRepositoryImpl;
use rankrs::infrastructure::repositories::ranking_repo_impl::RankingRepositoryImpl;
use rankrs::infrastructure::search::registry::EngineRegistry;
use rankrs::presentation::handlers::scan_handler;
use rankrs::presentation::routes;
use rankrs::queue::job_queue::RedisJobQueue;
use rankrs::utils::retry_policy::RetryPolicy;
use rankrs::utils::telemetry;
use rankrs::workers::manager::WorkerManager;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting rankrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize proxy client and engine registry
    let proxy_client = if settings.proxy.enabled {
        Arc::new(ProxyClient::new(&settings.proxy)?)
    } else {
        Arc::new(ProxyClient::direct(Duration::from_secs(
            settings.proxy.timeout_secs,
        )))
    };
    let registry = Arc::new(EngineRegistry::new(proxy_client));
    info!("Engine registry initialized: {:?}", registry.registered());

    // 5. Initialize queue and repositories
    let queue = Arc::new(RedisJobQueue::new(
        &settings.redis.url,
        settings.redis.queue_key.clone(),
    )?);
    let project_repo = Arc::new(ProjectRepositoryImpl::new(db.clone()));
    let keyword_repo = Arc::new(KeywordRepositoryImpl::new(db.clone()));
    let ranking_repo = Arc::new(RankingRepositoryImpl::new(db.clone()));

    // 6. Start workers
    let retry_policy = RetryPolicy {
        max_retries: settings.retry.max_retries,
        initial_backoff: Duration::from_millis(settings.retry.initial_backoff_ms),
        max_backoff: Duration::from_millis(settings.retry.max_backoff_ms),
        ..RetryPolicy::default()
    };
    let mut worker_manager = WorkerManager::new(
        project_repo.clone(),
        keyword_repo.clone(),
        ranking_repo.clone(),
        registry.clone(),
        queue.clone(),
        retry_policy,
    );
    worker_manager.start_workers(settings.workers.count).await;

    // 7. Wire up the dispatcher
    let dispatcher = Arc::new(TaskDispatcher::new(
        project_repo,
        keyword_repo,
        queue,
        registry,
    ));

    // 8. Start HTTP server
    let app = Router::new()
        .route("/health", get(routes::health_check))
        .route("/v1/version", get(routes::version))
        .route(
            "/v1/projects/{id}/scan",
            post(
                scan_handler::scan_project::<
                    ProjectRepositoryImpl,
                    KeywordRepositoryImpl,
                    RedisJobQueue,
                >,
            ),
        )
        .layer(Extension(dispatcher))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
