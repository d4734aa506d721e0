// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword_job::DeviceType;
use crate::domain::models::search_result::SearchResultEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ScrapeError {
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Timeout fetching {0}")]
    Timeout(String),
}

/// A provider-specific result-page scraper.
///
/// Each variant knows its own paging grid and structural parsing rules;
/// fetching goes through the shared forward-proxy client. The composed
/// `scrape` walks the page offsets in fixed order, concatenates the raw
/// pages in fetch order and parses the whole thing once, so entry
/// positions reflect on-page rank across pages.
#[async_trait]
pub trait SerpScraper: Send + Sync {
    /// Engine identifier as it appears in scan requests and ranking rows
    fn name(&self) -> &'static str;

    /// Fixed paging offsets this provider needs to cover ~100 results
    fn page_offsets(&self) -> &'static [u32];

    /// Build the request URL for one page of results
    fn build_target(&self, keyword: &str, offset: u32) -> String;

    /// Retrieve one raw result page through the forward proxy
    async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError>;

    /// Extract ordered entries from raw content. Elements missing a title
    /// or link are skipped but still consume their position index.
    fn parse(&self, html: &str) -> Vec<SearchResultEntry>;

    /// Full scrape for one keyword: every page in order, then one parse.
    /// A failed page propagates; there are no partial results.
    async fn scrape(
        &self,
        keyword: &str,
        region: &str,
        _device: DeviceType,
    ) -> Result<Vec<SearchResultEntry>, ScrapeError> {
        let offsets = self.page_offsets();
        let mut pages = Vec::with_capacity(offsets.len());

        for offset in offsets {
            let target = self.build_target(keyword, *offset);
            let html = self.fetch(&target, region).await?;
            pages.push(html);
        }

        Ok(self.parse(&pages.join("\n")))
    }
}
