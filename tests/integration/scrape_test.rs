// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use rankrs::domain::models::keyword_job::DeviceType;
use rankrs::domain::models::search_result::SearchResultEntry;
use rankrs::domain::search::scraper::{ScrapeError, SerpScraper};
use rankrs::infrastructure::proxy::ProxyClient;
use scraper::{Html, Selector};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 指向本地 mock 服务的分页抓取器，结构解析与真实引擎同式
struct PagedScraper {
    base: String,
    client: ProxyClient,
}

#[async_trait]
impl SerpScraper for PagedScraper {
    fn name(&self) -> &'static str {
        "paged"
    }

    fn page_offsets(&self) -> &'static [u32] {
        &[0, 50]
    }

    fn build_target(&self, keyword: &str, offset: u32) -> String {
        format!("{}/search?q={}&first={}", self.base, keyword, offset)
    }

    async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError> {
        self.client.fetch(target, region).await
    }

    fn parse(&self, html: &str) -> Vec<SearchResultEntry> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse("li.result").unwrap();
        let link_selector = Selector::parse("a").unwrap();
        let title_selector = Selector::parse("h2").unwrap();

        let mut results = Vec::new();
        for (index, element) in document.select(&result_selector).enumerate() {
            let link = element
                .select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"));
            let title = element.select(&title_selector).next();
            let (Some(link), Some(title)) = (link, title) else {
                continue;
            };
            results.push(SearchResultEntry::new(
                index as u32 + 1,
                link.to_string(),
                title.text().collect::<String>().trim().to_string(),
                String::new(),
            ));
        }
        results
    }
}

fn page(body: &str) -> String {
    format!("<html><body><ul>{}</ul></body></html>", body)
}

#[tokio::test]
async fn test_scrape_concatenates_pages_in_fetch_order() {
    let server = MockServer::start().await;

    // 仅在携带地理路由头时响应，同时校验请求头契约
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("first", "0"))
        .and(header("x-oxylabs-geo-location", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            r#"<li class="result"><h2>First</h2><a href="https://one.example"></a></li>"#,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("first", "50"))
        .and(header("x-oxylabs-geo-location", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            r#"<li class="result"><h2>Second</h2><a href="https://two.example"></a></li>"#,
        )))
        .mount(&server)
        .await;

    let scraper = PagedScraper {
        base: server.uri(),
        client: ProxyClient::direct(Duration::from_secs(5)),
    };

    let entries = scraper
        .scrape("anything", "us", DeviceType::Desktop)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[0].url, "https://one.example");
    assert_eq!(entries[1].position, 2);
    assert_eq!(entries[1].url, "https://two.example");
}

#[tokio::test]
async fn test_failed_page_propagates_without_partial_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("first", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(
            r#"<li class="result"><h2>First</h2><a href="https://one.example"></a></li>"#,
        )))
        .mount(&server)
        .await;

    // 第二页被反爬拦截
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("first", "50"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = PagedScraper {
        base: server.uri(),
        client: ProxyClient::direct(Duration::from_secs(5)),
    };

    let result = scraper.scrape("anything", "US", DeviceType::Desktop).await;

    assert!(matches!(result, Err(ScrapeError::Fetch(_))));
}

#[tokio::test]
async fn test_non_country_region_routes_through_default_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("x-oxylabs-geo-location", "United States"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = ProxyClient::direct(Duration::from_secs(5));
    let body = client
        .fetch(&format!("{}/page", server.uri()), "global")
        .await
        .unwrap();

    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = ProxyClient::direct(Duration::from_secs(5));
    let result = client.fetch(&format!("{}/page", server.uri()), "US").await;

    match result {
        Err(ScrapeError::Fetch(message)) => assert!(message.contains("429")),
        other => panic!("expected fetch error, got {:?}", other),
    }
}
