// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResultEntry;
use crate::domain::search::scraper::{ScrapeError, SerpScraper};
use crate::infrastructure::proxy::ProxyClient;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::Arc;

/// Bing result-page scraper.
///
/// Bing caps `count` at 50, so covering the tracked depth takes two pages
/// (`first=0` and `first=50`). Pages are fetched sequentially and parsed
/// as one concatenated document so positions run across both pages.
pub struct BingScraper {
    client: Arc<ProxyClient>,
}

impl BingScraper {
    pub fn new(client: Arc<ProxyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SerpScraper for BingScraper {
    fn name(&self) -> &'static str {
        "bing"
    }

    fn page_offsets(&self) -> &'static [u32] {
        &[0, 50]
    }

    fn build_target(&self, keyword: &str, offset: u32) -> String {
        let q = urlencoding::encode(keyword).replace("%20", "+");
        format!(
            "https://www.bing.com/search?q={}&count=50&first={}",
            q, offset
        )
    }

    async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError> {
        self.client.fetch(target, region).await
    }

    fn parse(&self, html: &str) -> Vec<SearchResultEntry> {
        let document = Html::parse_document(html);

        let result_selector = Selector::parse("li.b_algo").unwrap();
        let link_selector = Selector::parse("a").unwrap();
        let title_selector = Selector::parse("h2").unwrap();
        let snippet_selector = Selector::parse(".b_caption p").unwrap();

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

            let snippet = element
                .select(&snippet_selector)
                .next()
                .map(|e| e.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            results.push(SearchResultEntry::new(
                index as u32 + 1,
                link.to_string(),
                title.text().collect::<String>().trim().to_string(),
                snippet,
            ));
        }

        results
    }
}
