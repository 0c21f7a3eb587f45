//! GitHub users and their avatars.

use std::path::PathBuf;
use std::time::Duration;

use devportal_model::GithubUser;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::cache::PersistentCache;
use crate::error::{ClientError, Result};
use crate::resource::Memoized;

/// Public GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Avatars kept in the persisted cache.
pub const AVATAR_CACHE_CAPACITY: usize = 10;

/// How long a cached avatar URL stays valid.
pub const AVATAR_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

const USER_AGENT_VALUE: &str = concat!("flow-devportal/", env!("CARGO_PKG_VERSION"));

/// Read-only GitHub client with a persisted avatar cache.
pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    avatars: Memoized<String, String, PersistentCache<String, String>>,
}

impl GithubClient {
    /// Client for `base_url` whose avatar cache lives in `cache_path`.
    pub fn new(base_url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        let cache = PersistentCache::open(cache_path, AVATAR_CACHE_CAPACITY, AVATAR_CACHE_TTL);
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            avatars: Memoized::new(cache),
        })
    }

    /// `GET /users/{username}`. No username means no user.
    pub async fn user(&self, username: Option<&str>) -> Result<Option<GithubUser>> {
        match non_empty(username) {
            Some(username) => Ok(Some(self.fetch_user(username).await?)),
            None => Ok(None),
        }
    }

    /// Avatar URL of `username`, served from the cache while fresh.
    ///
    /// A newly fetched avatar is written to the cache file right away; a
    /// failed write is logged and the avatar still returned.
    pub async fn avatar(&self, username: Option<&str>) -> Result<Option<String>> {
        let Some(username) = non_empty(username) else {
            return Ok(None);
        };
        if let Some(avatar) = self.avatars.cached(&username.to_string()) {
            return Ok(Some(avatar));
        }
        let avatar = self
            .avatars
            .fetch(username.to_string(), || async {
                let user = self.fetch_user(username).await?;
                Ok::<_, ClientError>(user.avatar_url)
            })
            .await?;
        if let Err(error) = self.avatars.with_cache(|cache| cache.save()) {
            tracing::warn!(%error, "failed to save avatar cache");
        }
        Ok(Some(avatar))
    }

    async fn fetch_user(&self, username: &str) -> Result<GithubUser> {
        let url = format!("{}/users/{username}", self.base_url);
        tracing::debug!("Fetching GitHub user from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                url,
                body,
            });
        }
        Ok(response.json().await?)
    }
}

fn non_empty(username: Option<&str>) -> Option<&str> {
    username.map(str::trim).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let dir = tempfile::tempdir().unwrap();
        let client = GithubClient::new(GITHUB_API_URL, dir.path().join("avatars.json"));
        assert!(client.is_ok());
    }

    #[test]
    fn blank_usernames_are_ignored() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some(" flowdev ")), Some("flowdev"));
    }
}
