// src/error.rs

//! Unified error handling for the publish-alert service.

use std::fmt;

use thiserror::Error;

/// Result type alias for stampwatch operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// The crawl variants mirror the pipeline's failure scopes: only
/// `FeedUnavailable` aborts a poll cycle, every other crawl failure is
/// confined to the branch it occurred in.
#[derive(Error, Debug)]
pub enum AppError {
    /// Notification feed could not be fetched; aborts the poll cycle
    #[error("notification feed unavailable: {0}")]
    FeedUnavailable(String),

    /// Article lookup failed for one notification
    #[error("failed to fetch article {id}: {message}")]
    ArticleFetch { id: String, message: String },

    /// Image-set reference could not be resolved to a binary URL
    #[error("failed to resolve image set {url}: {message}")]
    ImageSetResolution { url: String, message: String },

    /// Binary image download failed
    #[error("failed to download image {url}: {message}")]
    ImageDownload { url: String, message: String },

    /// Stamp detector call failed or returned a malformed response
    #[error("stamp detection failed for {uri}: {message}")]
    Detection { uri: String, message: String },

    /// Outbound notification failed
    #[error("notification error: {0}")]
    Notify(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a cycle-fatal feed error.
    pub fn feed(message: impl fmt::Display) -> Self {
        Self::FeedUnavailable(message.to_string())
    }

    /// Create an article fetch error scoped to one notification.
    pub fn article_fetch(id: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::ArticleFetch {
            id: id.into(),
            message: message.to_string(),
        }
    }

    /// Create an image-set resolution error scoped to one reference.
    pub fn image_set(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::ImageSetResolution {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a download error scoped to one image.
    pub fn image_download(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::ImageDownload {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a detection error scoped to one image.
    pub fn detection(uri: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Detection {
            uri: uri.into(),
            message: message.to_string(),
        }
    }

    /// Create a notification error.
    pub fn notify(message: impl fmt::Display) -> Self {
        Self::Notify(message.to_string())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
