// src/services/content.rs

//! Content API client: notification feed, articles, image sets.
//!
//! Every endpoint takes the API key as an `apiKey` query parameter. Errors
//! are mapped to their pipeline scope at this boundary: the feed to the
//! cycle-fatal `FeedUnavailable`, everything else to the branch-scoped
//! variants carrying the id or URL they failed for.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;

use super::ContentApi;
use crate::error::{AppError, Result};
use crate::models::{Article, Config, FeedPage, ImageMember, ImageSet, Notification};
use crate::utils::http::create_async_client;

/// HTTP client for the content API.
pub struct ContentClient {
    client: Client,
    api_root: String,
    api_key: String,
}

impl ContentClient {
    /// Create a new content client from the application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_async_client(&config.crawler)?,
            api_root: config.feed.api_root.trim_end_matches('/').to_string(),
            api_key: config.feed.api_key.clone(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentApi for ContentClient {
    async fn notifications_since(&self, since: DateTime<Utc>) -> Result<Vec<Notification>> {
        let since = since.to_rfc3339_opts(SecondsFormat::Millis, true);
        tracing::info!(%since, "loading notifications");

        let url = format!("{}/content/notifications", self.api_root);
        let response = self
            .client
            .get(&url)
            .query(&[("since", since.as_str()), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(AppError::feed)?
            .error_for_status()
            .map_err(AppError::feed)?;

        let page: FeedPage = response.json().await.map_err(AppError::feed)?;
        tracing::info!(count = page.notifications.len(), "got notifications");
        Ok(page.notifications)
    }

    async fn article(&self, notification: &Notification) -> Result<Article> {
        tracing::debug!(url = %notification.api_url, "loading article");
        self.get_json(&notification.api_url)
            .await
            .map_err(|e| AppError::article_fetch(&notification.id, e))
    }

    async fn image_set(&self, url: &str) -> Result<ImageSet> {
        self.get_json(url)
            .await
            .map_err(|e| AppError::image_set(url, e))
    }

    async fn image_member(&self, id: &str) -> Result<ImageMember> {
        self.get_json(id)
            .await
            .map_err(|e| AppError::image_set(id, e))
    }
}
