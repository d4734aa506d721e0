// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::support::*;
use rankrs::domain::models::keyword_job::DeviceType;
use rankrs::domain::models::scan_request::ScanRequest;
use rankrs::domain::search::scraper::SerpScraper;
use rankrs::domain::services::task_dispatcher::{DispatchError, TaskDispatcher};
use rankrs::infrastructure::search::registry::EngineRegistry;
use std::collections::HashSet;
use std::sync::Arc;

fn stub_registry(engines: &[&'static str]) -> Arc<EngineRegistry> {
    let scrapers: Vec<Arc<dyn SerpScraper>> = engines
        .iter()
        .map(|&name| Arc::new(StubScraper::new(name, Ok(Vec::new()))) as Arc<dyn SerpScraper>)
        .collect();
    Arc::new(EngineRegistry::with_engines(scrapers))
}

fn scan_request(project_id: i32, engines: &[&str]) -> ScanRequest {
    ScanRequest {
        project_id,
        search_engines: engines.iter().map(|s| s.to_string()).collect(),
        region: "US".to_string(),
        device: DeviceType::Desktop,
    }
}

#[tokio::test]
async fn test_fan_out_is_keywords_times_engines_excluding_paused() {
    let projects = Arc::new(InMemoryProjects {
        projects: vec![project(1, "example.com")],
    });
    // 3个关键词，1个暂停
    let keywords = Arc::new(InMemoryKeywords {
        keywords: vec![
            keyword(10, 1, "alpha", false),
            keyword(11, 1, "beta", true),
            keyword(12, 1, "gamma", false),
        ],
    });
    let queue = Arc::new(InMemoryQueue::default());
    let dispatcher = TaskDispatcher::new(
        projects,
        keywords,
        queue.clone(),
        stub_registry(&["engine-a", "engine-b"]),
    );

    let receipt = dispatcher
        .dispatch(scan_request(1, &["engine-a", "engine-b"]))
        .await
        .unwrap();

    // 2个未暂停关键词 × 2个引擎 = 4个任务
    assert_eq!(receipt.jobs_submitted, 4);

    let jobs: Vec<_> = queue.jobs.lock().unwrap().iter().cloned().collect();
    assert_eq!(jobs.len(), 4);

    let pairs: HashSet<(i32, String)> = jobs
        .iter()
        .map(|j| (j.keyword_id, j.engine.clone()))
        .collect();
    assert_eq!(pairs.len(), 4, "every pair submitted exactly once");
    assert!(!pairs.iter().any(|(keyword_id, _)| *keyword_id == 11));

    for job in &jobs {
        assert_eq!(job.project_id, 1);
        assert_eq!(job.region, "US");
        assert_eq!(job.device, DeviceType::Desktop);
        assert_eq!(job.attempt, 0);
    }
}

#[tokio::test]
async fn test_unknown_engine_is_skipped_not_fatal() {
    let projects = Arc::new(InMemoryProjects {
        projects: vec![project(1, "example.com")],
    });
    let keywords = Arc::new(InMemoryKeywords {
        keywords: vec![keyword(10, 1, "alpha", false), keyword(12, 1, "gamma", false)],
    });
    let queue = Arc::new(InMemoryQueue::default());
    let dispatcher =
        TaskDispatcher::new(projects, keywords, queue.clone(), stub_registry(&["engine-a"]));

    let receipt = dispatcher
        .dispatch(scan_request(1, &["engine-a", "altavista"]))
        .await
        .unwrap();

    // altavista 被跳过，派发整体仍然成功
    assert_eq!(receipt.jobs_submitted, 2);
    let jobs = queue.jobs.lock().unwrap();
    assert!(jobs.iter().all(|j| j.engine == "engine-a"));
}

#[tokio::test]
async fn test_missing_project_is_synchronous_not_found() {
    let projects = Arc::new(InMemoryProjects::default());
    let keywords = Arc::new(InMemoryKeywords::default());
    let queue = Arc::new(InMemoryQueue::default());
    let dispatcher =
        TaskDispatcher::new(projects, keywords, queue.clone(), stub_registry(&["engine-a"]));

    let result = dispatcher.dispatch(scan_request(99, &["engine-a"])).await;

    assert!(matches!(result, Err(DispatchError::ProjectNotFound(99))));
    assert!(queue.jobs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_project_with_no_active_keywords_dispatches_nothing() {
    let projects = Arc::new(InMemoryProjects {
        projects: vec![project(1, "example.com")],
    });
    let keywords = Arc::new(InMemoryKeywords {
        keywords: vec![keyword(10, 1, "alpha", true)],
    });
    let queue = Arc::new(InMemoryQueue::default());
    let dispatcher =
        TaskDispatcher::new(projects, keywords, queue.clone(), stub_registry(&["engine-a"]));

    let receipt = dispatcher.dispatch(scan_request(1, &["engine-a"])).await.unwrap();

    assert_eq!(receipt.jobs_submitted, 0);
    assert!(queue.jobs.lock().unwrap().is_empty());
}
