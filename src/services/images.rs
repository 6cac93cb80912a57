// src/services/images.rs

//! Binary image download with PNG filtering.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::BinaryFetcher;
use crate::error::{AppError, Result};
use crate::models::{CrawlerConfig, ImageBinary};
use crate::utils::http::create_async_client;
use crate::utils::image_basename;

/// The only content type the pipeline inspects. Compared exactly, matching
/// the detector's expectation of raw PNG bytes.
const PNG_CONTENT_TYPE: &str = "image/png";

/// Downloads rendition binaries. The binary store takes no API key.
pub struct ImageDownloader {
    client: Client,
}

impl ImageDownloader {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }
}

#[async_trait]
impl BinaryFetcher for ImageDownloader {
    async fn download(&self, url: &str) -> Result<Option<ImageBinary>> {
        let name = image_basename(url);
        tracing::debug!(image = %name, "downloading image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::image_download(url, e))?
            .error_for_status()
            .map_err(|e| AppError::image_download(url, e))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type != PNG_CONTENT_TYPE {
            tracing::debug!(image = %name, %content_type, "not a PNG, ignoring");
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::image_download(url, e))?;

        Ok(Some(ImageBinary {
            uri: url.to_string(),
            bytes: bytes.to_vec(),
            content_type,
        }))
    }
}
