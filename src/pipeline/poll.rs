// src/pipeline/poll.rs

//! Poll cycle orchestrator.
//!
//! One cycle: fetch the notification delta, then fan out one independent
//! branch per notification (article → image-set resolution → download →
//! detection) and settle them all into a single report. Branch failures are
//! logged and counted at the boundary where they occur; the only failure
//! that aborts a cycle is the feed fetch itself.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use crate::error::{AppError, Result};
use crate::models::{
    ArticleSummary, CrawlOutcome, InspectedImage, Notification, PollCycleReport, ReportEntry,
};
use crate::services::{BinaryFetcher, ContentApi, StampReader, extract_image_set_refs};

/// Drives one poll cycle against the service trait seams.
pub struct StampCrawler {
    api: Arc<dyn ContentApi>,
    binaries: Arc<dyn BinaryFetcher>,
    detector: Arc<dyn StampReader>,
    concurrency: usize,
}

/// One settled branch: the article summary plus whatever images survived.
struct Branch {
    article: ArticleSummary,
    images: Vec<InspectedImage>,
    stats: BranchStats,
}

#[derive(Debug, Default, Clone, Copy)]
struct BranchStats {
    image_set_refs: usize,
    image_set_failures: usize,
    images_skipped: usize,
    download_failures: usize,
    detection_failures: usize,
    images_inspected: usize,
}

impl StampCrawler {
    pub fn new(
        api: Arc<dyn ContentApi>,
        binaries: Arc<dyn BinaryFetcher>,
        detector: Arc<dyn StampReader>,
        concurrency: usize,
    ) -> Self {
        Self {
            api,
            binaries,
            detector,
            concurrency: concurrency.max(1),
        }
    }

    /// Run one full poll cycle for the window starting at `window_start`.
    ///
    /// Returns `Err` only when the feed itself is unavailable; every other
    /// failure is absorbed into the report's outcome counters.
    pub async fn run_cycle(&self, window_start: DateTime<Utc>) -> Result<PollCycleReport> {
        let notifications = self.api.notifications_since(window_start).await?;

        let mut outcome = CrawlOutcome {
            notifications: notifications.len(),
            ..CrawlOutcome::default()
        };
        let mut entries = Vec::new();

        // Branches run concurrently and settle in completion order; the
        // cycle does not finish until every started branch is terminal.
        let mut branches = stream::iter(notifications)
            .map(|notification| async move {
                let branch = self.crawl_branch(&notification).await;
                (notification, branch)
            })
            .buffer_unordered(self.concurrency);

        while let Some((notification, branch)) = branches.next().await {
            match branch {
                Ok(branch) => {
                    absorb(&mut outcome, branch.stats);
                    entries.push(ReportEntry {
                        notification,
                        article: branch.article,
                        images: branch.images,
                    });
                }
                Err(error) => {
                    outcome.article_failures += 1;
                    tracing::warn!(notification = %notification.id, %error, "branch dropped");
                }
            }
        }

        tracing::info!(
            notifications = outcome.notifications,
            entries = entries.len(),
            inspected = outcome.images_inspected,
            "poll cycle aggregated"
        );
        Ok(PollCycleReport { entries, outcome })
    }

    /// Follow one notification from article fetch through stamp detection.
    async fn crawl_branch(&self, notification: &Notification) -> Result<Branch> {
        let article = self.api.article(notification).await?;
        let refs = extract_image_set_refs(&article.body_xml)?;

        let mut stats = BranchStats {
            image_set_refs: refs.len(),
            ..BranchStats::default()
        };

        // References resolve independently; output keeps discovery order.
        let resolutions: Vec<Result<String>> = stream::iter(refs)
            .map(|reference| self.resolve_reference(reference))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut urls = Vec::new();
        for resolution in resolutions {
            match resolution {
                Ok(url) => urls.push(url),
                Err(error) => {
                    stats.image_set_failures += 1;
                    tracing::warn!(article = %article.id, %error, "image set dropped");
                }
            }
        }

        let inspections: Vec<Result<Option<InspectedImage>>> = stream::iter(urls)
            .map(|url| self.inspect_image(url))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut images = Vec::new();
        for inspection in inspections {
            match inspection {
                Ok(Some(image)) => {
                    stats.images_inspected += 1;
                    images.push(image);
                }
                Ok(None) => stats.images_skipped += 1,
                Err(error) => {
                    match &error {
                        AppError::Detection { .. } => stats.detection_failures += 1,
                        _ => stats.download_failures += 1,
                    }
                    tracing::warn!(article = %article.id, %error, "image dropped");
                }
            }
        }

        tracing::debug!(article = %article.id, images = images.len(), "branch settled");
        Ok(Branch {
            article: ArticleSummary::from(&article),
            images,
            stats,
        })
    }

    /// Resolve one image-set reference to its binary download URL.
    ///
    /// First-member policy: the set's first rendition is treated as the
    /// canonical one; later renditions are never fetched.
    async fn resolve_reference(&self, reference: String) -> Result<String> {
        let set = self.api.image_set(&reference).await?;
        let member = set
            .members
            .first()
            .ok_or_else(|| AppError::image_set(&reference, "image set has no members"))?;
        let document = self.api.image_member(&member.id).await?;
        Ok(document.binary_url)
    }

    /// Download one binary and run stamp detection on it. `None` means the
    /// binary was not a PNG and was skipped.
    async fn inspect_image(&self, url: String) -> Result<Option<InspectedImage>> {
        let Some(binary) = self.binaries.download(&url).await? else {
            return Ok(None);
        };
        let stamps = self.detector.read_stamps(&binary).await?;
        Ok(Some(InspectedImage {
            uri: binary.uri,
            stamps,
        }))
    }
}

fn absorb(outcome: &mut CrawlOutcome, stats: BranchStats) {
    outcome.image_set_refs += stats.image_set_refs;
    outcome.image_set_failures += stats.image_set_failures;
    outcome.images_skipped += stats.images_skipped;
    outcome.download_failures += stats.download_failures;
    outcome.detection_failures += stats.detection_failures;
    outcome.images_inspected += stats.images_inspected;
}
