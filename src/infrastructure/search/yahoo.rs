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

/// Yahoo result-page scraper.
///
/// Yahoo paginates in tens via the 1-based `b` parameter, so ten
/// sequential fetches cover the tracked depth. Organic results use the
/// `dd algo algo-sr` container class stack.
pub struct YahooScraper {
    client: Arc<ProxyClient>,
}

impl YahooScraper {
    pub fn new(client: Arc<ProxyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SerpScraper for YahooScraper {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn page_offsets(&self) -> &'static [u32] {
        &[0, 10, 20, 30, 40, 50, 60, 70, 80, 90]
    }

    fn build_target(&self, keyword: &str, offset: u32) -> String {
        let q = urlencoding::encode(keyword).replace("%20", "+");
        format!("https://search.yahoo.com/search?p={}&b={}", q, offset + 1)
    }

    async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError> {
        self.client.fetch(target, region).await
    }

    fn parse(&self, html: &str) -> Vec<SearchResultEntry> {
        let document = Html::parse_document(html);

        let result_selector = Selector::parse("div.dd.algo.algo-sr").unwrap();
        let link_selector = Selector::parse("a").unwrap();
        let title_selector = Selector::parse("h3").unwrap();
        let snippet_selector = Selector::parse(".compText p").unwrap();

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
