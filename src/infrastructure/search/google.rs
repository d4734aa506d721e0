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

/// Google result-page scraper.
///
/// A single request with `num=100` covers the tracked depth, so the paging
/// grid is one offset. Organic results live in `div.tF2Cxc` containers;
/// the snippet selector has a fallback because Google ships two variants
/// of the description block.
pub struct GoogleScraper {
    client: Arc<ProxyClient>,
}

impl GoogleScraper {
    pub fn new(client: Arc<ProxyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SerpScraper for GoogleScraper {
    fn name(&self) -> &'static str {
        "google"
    }

    fn page_offsets(&self) -> &'static [u32] {
        &[0]
    }

    fn build_target(&self, keyword: &str, _offset: u32) -> String {
        let q = urlencoding::encode(keyword).replace("%20", "+");
        format!("https://www.google.com/search?q={}&hl=en&num=100", q)
    }

    async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError> {
        self.client.fetch(target, region).await
    }

    fn parse(&self, html: &str) -> Vec<SearchResultEntry> {
        let document = Html::parse_document(html);

        let result_selector = Selector::parse("div.tF2Cxc").unwrap();
        let link_selector = Selector::parse("a").unwrap();
        let title_selector = Selector::parse("h3").unwrap();
        let snippet_selector = Selector::parse(".VwiC3b").unwrap();
        let snippet_fallback = Selector::parse(".IsZvec").unwrap();

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
                .or_else(|| element.select(&snippet_fallback).next())
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
