//! Encyclopedia adapter (Wikipedia)
//!
//! Resolves a topic with the opensearch API, then reads the page summary
//! from the REST API. Disambiguation pages are a successful outcome that
//! lists candidate topics.

use super::network_failure;
use crate::config::EncyclopediaConfig;
use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

const ACTION: &str = "fetch information from Wikipedia";
const GENERIC_FAILURE: &str =
    "An error occurred while trying to fetch information from Wikipedia.";

/// Result of an encyclopedia lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Leading sentences of the article
    Summary(String),
    /// Topic names several articles
    Disambiguation { topic: String, options: Vec<String> },
}

#[async_trait]
pub trait EncyclopediaService: Send + Sync {
    async fn fetch(&self, topic: &str) -> ServiceResult<Lookup>;
}

/// REST page summary, trimmed to what we read
#[derive(Debug, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
}

impl PageSummary {
    pub fn is_disambiguation(&self) -> bool {
        self.kind == "disambiguation"
    }
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base_url: String,
    sentences: usize,
    max_candidates: usize,
}

impl WikipediaClient {
    pub fn new(http: reqwest::Client, config: &EncyclopediaConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sentences: config.sentences.max(1),
            max_candidates: config.max_candidates.max(1),
        }
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> ServiceResult<(u16, String)> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| network_failure(ACTION, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| network_failure(ACTION, e))?;
        Ok((status, body))
    }

    async fn search(&self, topic: &str) -> ServiceResult<Vec<String>> {
        let limit = self.max_candidates.to_string();
        let url = format!("{}/w/api.php", self.base_url);
        let (status, body) = self
            .get(
                &url,
                &[
                    ("action", "opensearch"),
                    ("search", topic),
                    ("limit", limit.as_str()),
                    ("namespace", "0"),
                    ("format", "json"),
                ],
            )
            .await?;
        parse_opensearch(status, &body)
    }

    async fn summary(&self, title: &str) -> ServiceResult<Option<PageSummary>> {
        let path = urlencoding::encode(&title.replace(' ', "_")).into_owned();
        let url = format!("{}/api/rest_v1/page/summary/{}", self.base_url, path);
        let (status, body) = self.get(&url, &[("redirect", "true")]).await?;
        parse_summary(status, &body)
    }
}

#[async_trait]
impl EncyclopediaService for WikipediaClient {
    async fn fetch(&self, topic: &str) -> ServiceResult<Lookup> {
        let topic = topic.trim();
        if topic.is_empty() {
            return resolve(topic, &[], None, self.max_candidates, self.sentences);
        }

        info!("📚 Looking up '{}'", topic);
        let candidates = self.search(topic).await?;
        let page = match candidates.first() {
            Some(best) => self.summary(best).await?,
            None => None,
        };
        resolve(topic, &candidates, page, self.max_candidates, self.sentences)
    }
}

/// Turn search candidates and the best page into a lookup outcome
pub fn resolve(
    topic: &str,
    candidates: &[String],
    page: Option<PageSummary>,
    max_candidates: usize,
    sentences: usize,
) -> ServiceResult<Lookup> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ServiceError::NoMatch("that topic".to_string()));
    }
    let page = page.ok_or_else(|| ServiceError::NoMatch(topic.to_string()))?;

    if page.is_disambiguation() {
        let mut options: Vec<String> = candidates
            .iter()
            .filter(|c| **c != page.title)
            .cloned()
            .collect();
        if options.is_empty() {
            options = candidates.to_vec();
        }
        options.truncate(max_candidates);
        debug!("'{}' is ambiguous: {:?}", topic, options);
        return Ok(Lookup::Disambiguation {
            topic: topic.to_string(),
            options,
        });
    }

    let summary = first_sentences(&page.extract, sentences);
    if summary.is_empty() {
        return Err(ServiceError::NoMatch(topic.to_string()));
    }
    Ok(Lookup::Summary(summary))
}

/// Opensearch returns `[query, [titles], [descriptions], [urls]]`
pub fn parse_opensearch(status: u16, body: &str) -> ServiceResult<Vec<String>> {
    if !(200..300).contains(&status) {
        debug!("Opensearch returned {}: {}", status, body);
        return Err(ServiceError::Unavailable(GENERIC_FAILURE));
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| ServiceError::Unavailable(GENERIC_FAILURE))?;
    let titles = value
        .get(1)
        .and_then(|v| v.as_array())
        .ok_or(ServiceError::Unavailable(GENERIC_FAILURE))?;

    Ok(titles
        .iter()
        .filter_map(|t| t.as_str().map(str::to_string))
        .collect())
}

/// `Ok(None)` when the page does not exist
pub fn parse_summary(status: u16, body: &str) -> ServiceResult<Option<PageSummary>> {
    if status == 404 {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        debug!("Summary endpoint returned {}: {}", status, body);
        return Err(ServiceError::Unavailable(GENERIC_FAILURE));
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|_| ServiceError::Unavailable(GENERIC_FAILURE))
}

/// Keep the first `count` sentences of `text`
pub fn first_sentences(text: &str, count: usize) -> String {
    let text = text.trim();
    let mut seen = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                seen += 1;
                if seen == count {
                    return text[..idx + c.len_utf8()].to_string();
                }
            }
        }
    }

    text.to_string()
}
