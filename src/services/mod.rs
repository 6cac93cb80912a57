//! Service layer for the publish-alert service.
//!
//! This module contains the clients the crawl pipeline is built from:
//! - Content API access (`ContentClient`: feed, articles, image sets)
//! - Binary image download (`ImageDownloader`)
//! - Stamp detection (`StampDetector`)
//! - Image-set reference extraction (`extract_image_set_refs`)
//!
//! The pipeline depends on the traits below rather than on the concrete
//! HTTP clients, so tests can drive it with in-memory fakes.

mod content;
mod images;
mod markup;
mod stamper;

pub use content::ContentClient;
pub use images::ImageDownloader;
pub use markup::extract_image_set_refs;
pub use stamper::StampDetector;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Article, ImageBinary, ImageMember, ImageSet, Notification, Stamp};

/// Read access to the content API: the notification feed plus the article
/// and image-set documents it points at.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch the notification delta since the given instant.
    /// Failure here is cycle-fatal (`AppError::FeedUnavailable`).
    async fn notifications_since(&self, since: DateTime<Utc>) -> Result<Vec<Notification>>;

    /// Fetch the full article document for one notification.
    async fn article(&self, notification: &Notification) -> Result<Article>;

    /// Fetch an image-set document by its reference URL.
    async fn image_set(&self, url: &str) -> Result<ImageSet>;

    /// Fetch an image-set member document by its id URL.
    async fn image_member(&self, id: &str) -> Result<ImageMember>;
}

/// Binary image download. `Ok(None)` means the image exists but is not a
/// PNG and is skipped rather than inspected.
#[async_trait]
pub trait BinaryFetcher: Send + Sync {
    async fn download(&self, url: &str) -> Result<Option<ImageBinary>>;
}

/// The external watermark detector, consumed as an opaque
/// binary-in/stamp-list-out endpoint.
#[async_trait]
pub trait StampReader: Send + Sync {
    async fn read_stamps(&self, image: &ImageBinary) -> Result<Vec<Stamp>>;
}
