// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::support::*;
use rankrs::domain::models::keyword_job::DeviceType;
use rankrs::domain::models::scan_request::ScanRequest;
use rankrs::domain::search::scraper::{ScrapeError, SerpScraper};
use rankrs::domain::services::task_dispatcher::TaskDispatcher;
use rankrs::infrastructure::search::registry::EngineRegistry;
use rankrs::queue::job_queue::JobQueue;
use rankrs::utils::retry_policy::RetryPolicy;
use rankrs::workers::rank_worker::{JobOutcome, RankWorker};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn instant_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        initial_backoff: Duration::from_millis(0),
        max_backoff: Duration::from_millis(0),
        backoff_multiplier: 2.0,
        jitter_factor: 0.0,
        enable_jitter: false,
    }
}

struct Pipeline {
    dispatcher: TaskDispatcher<InMemoryProjects, InMemoryKeywords, InMemoryQueue>,
    worker: RankWorker<InMemoryProjects, InMemoryKeywords, InMemoryRankings, InMemoryQueue>,
    queue: Arc<InMemoryQueue>,
    rankings: Arc<InMemoryRankings>,
    scraper: Arc<StubScraper>,
}

fn pipeline(scraper: StubScraper) -> Pipeline {
    let projects = Arc::new(InMemoryProjects {
        projects: vec![project(1, "example.com/page")],
    });
    let keywords = Arc::new(InMemoryKeywords {
        keywords: vec![keyword(10, 1, "example keyword", false)],
    });
    let rankings = Arc::new(InMemoryRankings::default());
    let queue = Arc::new(InMemoryQueue::default());
    let scraper = Arc::new(scraper);
    let registry = Arc::new(EngineRegistry::with_engines(vec![
        scraper.clone() as Arc<dyn SerpScraper>
    ]));

    let dispatcher = TaskDispatcher::new(
        projects.clone(),
        keywords.clone(),
        queue.clone(),
        registry.clone(),
    );
    let worker = RankWorker::new(
        projects,
        keywords,
        rankings.clone(),
        registry,
        queue.clone(),
        instant_retry_policy(),
    );

    Pipeline {
        dispatcher,
        worker,
        queue,
        rankings,
        scraper,
    }
}

fn scan_request() -> ScanRequest {
    ScanRequest {
        project_id: 1,
        search_engines: vec!["engine-a".to_string()],
        region: "US".to_string(),
        device: DeviceType::Mobile,
    }
}

/// 持续出队执行直至队列（含延迟重入队）排空，返回执行次数
async fn drain(p: &Pipeline) -> u32 {
    let mut executions = 0;
    loop {
        // 留出时间让计划中的重入队落地
        sleep(Duration::from_millis(20)).await;
        match p.queue.dequeue().await.unwrap() {
            Some(job) => {
                executions += 1;
                p.worker.process_job(job).await;
            }
            None => break,
        }
    }
    executions
}

#[tokio::test]
async fn test_dispatch_to_ranking_row_happy_path() {
    let entries = vec![
        entry(1, "https://other.com"),
        entry(2, "https://example.com/page?x=1"),
    ];
    let p = pipeline(StubScraper::new("engine-a", Ok(entries)));

    let receipt = p.dispatcher.dispatch(scan_request()).await.unwrap();
    assert_eq!(receipt.jobs_submitted, 1);

    let executions = drain(&p).await;
    assert_eq!(executions, 1);

    let rows = p.rankings.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].position, 2);
    assert_eq!(rows[0].keyword_id, 10);
    assert_eq!(rows[0].project_id, 1);
    assert_eq!(rows[0].search_engine, "engine-a");
    assert_eq!(rows[0].region, "US");
    assert_eq!(rows[0].device, DeviceType::Mobile);
    assert_eq!(rows[0].url, "https://example.com/page?x=1");
}

#[tokio::test]
async fn test_not_found_outcome_persists_nothing() {
    let entries = vec![entry(1, "https://other.com"), entry(2, "https://another.org")];
    let p = pipeline(StubScraper::new("engine-a", Ok(entries)));

    p.dispatcher.dispatch(scan_request()).await.unwrap();
    let executions = drain(&p).await;

    assert_eq!(executions, 1);
    assert!(p.rankings.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_failures_retry_then_exhaust() {
    let p = pipeline(StubScraper::new(
        "engine-a",
        Err(ScrapeError::Fetch("status 503".to_string())),
    ));

    p.dispatcher.dispatch(scan_request()).await.unwrap();
    let executions = drain(&p).await;

    // 1次初始执行 + 3次重试，之后任务被丢弃
    assert_eq!(executions, 4);
    assert_eq!(*p.scraper.scrape_calls.lock().unwrap(), 4);
    assert!(p.rankings.rows.lock().unwrap().is_empty());
    assert!(p.queue.jobs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_worker_drops_job_for_unregistered_engine() {
    let p = pipeline(StubScraper::new("engine-a", Ok(Vec::new())));

    // 队列中直接出现一个指向未知引擎的任务
    let rogue = rankrs::domain::models::keyword_job::KeywordJob::new(
        10,
        1,
        "altavista".to_string(),
        "US".to_string(),
        DeviceType::Desktop,
    );
    p.queue.enqueue(&rogue).await.unwrap();

    let job = p.queue.dequeue().await.unwrap().unwrap();
    let outcome = p.worker.process_job(job).await;

    assert_eq!(outcome, JobOutcome::Dropped);
    assert!(p.rankings.rows.lock().unwrap().is_empty());
    assert_eq!(*p.scraper.scrape_calls.lock().unwrap(), 0);
}
