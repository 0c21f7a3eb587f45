//! Discourse forum client.

use devportal_model::{CategoryResponse, ForumTopicSummary, Topic, TopicsResponse};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::resource::Memoized;

/// Announcements sub-category listing breaking changes.
pub const BREAKING_CHANGES_PATH: &str = "c/announcements/breaking-changes/30.json";

/// Category listing mainnet spork announcements.
pub const MAINNET_SPORKS_PATH: &str = "c/mainnet-sporks/36.json";

const USER_AGENT_VALUE: &str = concat!("flow-devportal/", env!("CARGO_PKG_VERSION"));

/// Read-only client for a Discourse instance.
///
/// Category names are looked up once per category id and remembered for the
/// lifetime of the client.
pub struct DiscourseClient {
    client: reqwest::Client,
    base_url: String,
    category_names: Memoized<u64, String>,
}

impl DiscourseClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            category_names: Memoized::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /latest.json`.
    pub async fn latest_topics(&self) -> Result<Vec<Topic>> {
        let response: TopicsResponse = self.get_json("latest.json").await?;
        Ok(response.topic_list.topics)
    }

    /// `GET /c/{id}/show.json`.
    pub async fn category(&self, id: u64) -> Result<CategoryResponse> {
        self.get_json(&format!("c/{id}/show.json")).await
    }

    /// Display name of category `id`, fetched at most once.
    pub async fn category_name(&self, id: u64) -> Result<String> {
        self.category_names
            .fetch(id, || async move {
                let response = self.category(id).await?;
                Ok::<_, ClientError>(response.category.name)
            })
            .await
    }

    /// Topics of the category listing at `path`, relative to the base URL.
    pub async fn category_topics(&self, path: &str) -> Result<Vec<Topic>> {
        let response: TopicsResponse = self.get_json(path).await?;
        Ok(response.topic_list.topics)
    }

    pub async fn breaking_changes_topics(&self) -> Result<Vec<Topic>> {
        self.category_topics(BREAKING_CHANGES_PATH).await
    }

    pub async fn mainnet_spork_topics(&self) -> Result<Vec<Topic>> {
        self.category_topics(MAINNET_SPORKS_PATH).await
    }

    /// The first few latest topics as forum cells, each labelled with its
    /// category name. Any failed lookup fails the whole list.
    pub async fn latest_summaries(&self) -> Result<Vec<ForumTopicSummary>> {
        let topics = self.latest_topics().await?;
        let mut summaries = Vec::new();
        for topic in devportal_transform::latest_topics(&topics) {
            let category_name = self.category_name(topic.category_id).await?;
            summaries.push(devportal_transform::topic_summary(
                topic,
                &category_name,
                &self.base_url,
            ));
        }
        Ok(summaries)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response, &url).await
    }

    /// Checks the status and parses the JSON body.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DiscourseClient::new("https://forum.onflow.org/").unwrap();
        assert_eq!(client.base_url(), "https://forum.onflow.org");
    }
}
