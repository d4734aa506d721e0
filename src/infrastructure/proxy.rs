// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ProxySettings;
use crate::domain::search::scraper::ScrapeError;
use reqwest::Proxy;
use std::time::Duration;
use tracing::debug;

/// Fixed outbound User-Agent for all provider fetches
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Geo-routing header understood by the unblocker proxy
const GEO_HEADER: &str = "x-oxylabs-geo-location";

/// HTTP client for provider fetches through the forward proxy.
///
/// Credentials and the TLS-verification stance come from configuration at
/// construction time; scrapers never read the process environment. Every
/// request carries the fixed User-Agent and a geo-routing header derived
/// from the job's region.
pub struct ProxyClient {
    client: reqwest::Client,
}

impl ProxyClient {
    /// Build a client from proxy settings.
    ///
    /// `accept_invalid_certs` disables certificate verification toward the
    /// proxy endpoint. It defaults to off; enabling it is an explicit trust
    /// decision about the unblocker in front of the scrapers.
    pub fn new(settings: &ProxySettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs));

        if settings.enabled {
            let proxy_url = format!(
                "http://{}:{}@{}",
                settings.username, settings.password, settings.endpoint
            );
            builder = builder.proxy(Proxy::all(&proxy_url)?);
        }

        if settings.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Direct client without a proxy, same timeout and header behavior.
    /// Used when the proxy is disabled in configuration and by tests.
    pub fn direct(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// GET one result page. Non-2xx status and timeouts both surface as
    /// fetch errors, which the worker treats as retryable.
    pub async fn fetch(&self, target: &str, region: &str) -> Result<String, ScrapeError> {
        debug!(target, region, "Fetching result page via proxy");

        let response = self
            .client
            .get(target)
            .header(GEO_HEADER, Self::geo_location(region))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScrapeError::Timeout(target.to_string())
                } else {
                    ScrapeError::Fetch(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch(format!(
                "{} returned status {}",
                target, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Fetch(e.to_string()))
    }

    /// Map a region code onto the proxy's geo-routing value. Two-letter
    /// country codes pass through uppercased; anything else routes through
    /// the default location, matching the provider's accepted values.
    pub fn geo_location(region: &str) -> String {
        if region.len() == 2 {
            region.to_uppercase()
        } else {
            "United States".to_string()
        }
    }
}
