//! News adapter (NewsAPI top headlines)

use super::network_failure;
use crate::config::{non_empty, NewsConfig};
use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

const ACTION: &str = "fetch news headlines";

#[async_trait]
pub trait NewsService: Send + Sync {
    /// Top headlines in provider order
    async fn fetch(&self) -> ServiceResult<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    country: String,
    max_headlines: usize,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(http: reqwest::Client, config: &NewsConfig) -> Self {
        Self {
            http,
            api_key: non_empty(&config.api_key).map(str::to_string),
            country: config.country.clone(),
            max_headlines: config.max_headlines,
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl NewsService for NewsApiClient {
    async fn fetch(&self) -> ServiceResult<Vec<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ServiceError::ConfigMissing { service: "News" })?;

        info!("📰 Fetching top headlines for '{}'", self.country);
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("country", self.country.as_str()), ("apiKey", api_key)])
            .send()
            .await
            .map_err(|e| network_failure(ACTION, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| network_failure(ACTION, e))?;

        parse_headlines(status, &body, self.max_headlines)
    }
}

/// Extract article titles, skipping articles without one. A limit of 0 keeps all.
pub fn parse_headlines(status: u16, body: &str, limit: usize) -> ServiceResult<Vec<String>> {
    if !(200..300).contains(&status) {
        debug!("News provider returned {}: {}", status, body);
        return Err(ServiceError::ServiceUnavailable {
            status,
            action: ACTION,
        });
    }

    let parsed: NewsResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Malformed news body: {}", e);
        ServiceError::Malformed {
            status,
            action: ACTION,
        }
    })?;

    let limit = if limit == 0 { usize::MAX } else { limit };
    Ok(parsed
        .articles
        .into_iter()
        .filter_map(|a| a.title)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .take(limit)
        .collect())
}
