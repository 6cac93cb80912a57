// src/services/stamper.rs

//! Stamp detector client.
//!
//! The detector is an opaque service: PNG bytes in, a JSON array of stamp
//! records out. An empty array is a valid "no watermark" answer.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::StampReader;
use crate::error::{AppError, Result};
use crate::models::{Config, ImageBinary, Stamp};
use crate::utils::http::create_async_client;
use crate::utils::image_basename;

/// HTTP client for the external stamp detection endpoint.
pub struct StampDetector {
    client: Client,
    read_url: String,
}

impl StampDetector {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_async_client(&config.crawler)?,
            read_url: config.stamper.read_url(),
        })
    }
}

#[async_trait]
impl StampReader for StampDetector {
    async fn read_stamps(&self, image: &ImageBinary) -> Result<Vec<Stamp>> {
        let name = image_basename(&image.uri);
        tracing::debug!(image = %name, "looking for stamps");

        let response = self
            .client
            .post(&self.read_url)
            .header(CONTENT_TYPE, image.content_type.as_str())
            .body(image.bytes.clone())
            .send()
            .await
            .map_err(|e| AppError::detection(&image.uri, e))?
            .error_for_status()
            .map_err(|e| AppError::detection(&image.uri, e))?;

        let stamps: Vec<Stamp> = response
            .json()
            .await
            .map_err(|e| AppError::detection(&image.uri, e))?;

        tracing::debug!(image = %name, count = stamps.len(), "loaded stamps");
        Ok(stamps)
    }
}
