//! Poll cycle report structures.

use serde::{Deserialize, Serialize};

use super::article::ArticleSummary;
use super::notification::Notification;

/// A detected watermark record. The detector owns the schema; we carry the
/// payload through to logs and notifications without interpreting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Stamp(pub serde_json::Value);

/// One binary image that made it through detection, with whatever stamps
/// were found in it (possibly none).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InspectedImage {
    pub uri: String,
    pub stamps: Vec<Stamp>,
}

impl InspectedImage {
    pub fn has_stamps(&self) -> bool {
        !self.stamps.is_empty()
    }
}

/// One surviving branch of a poll cycle: a notification, its article, and
/// the images inspected for it in body-markup discovery order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportEntry {
    pub notification: Notification,
    pub article: ArticleSummary,
    pub images: Vec<InspectedImage>,
}

impl ReportEntry {
    /// All stamps collected across this entry's images.
    pub fn stamps(&self) -> impl Iterator<Item = &Stamp> {
        self.images.iter().flat_map(|image| image.stamps.iter())
    }

    /// Whether any image in this entry carries a stamp; entries that do are
    /// handed to the outbound notifier.
    pub fn has_stamps(&self) -> bool {
        self.images.iter().any(InspectedImage::has_stamps)
    }
}

/// Aggregate output of one poll cycle. Entry order is not significant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PollCycleReport {
    pub entries: Vec<ReportEntry>,
    pub outcome: CrawlOutcome,
}

impl PollCycleReport {
    /// Entries worth reviewing: at least one stamped image.
    pub fn stamped_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.has_stamps())
    }
}

/// Per-cycle tally of how the fan-out went. Failures recorded here were
/// already logged at the branch boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlOutcome {
    /// Notifications returned by the feed
    pub notifications: usize,
    /// Branches dropped because the article fetch failed
    pub article_failures: usize,
    /// Image-set references found in article bodies
    pub image_set_refs: usize,
    /// References dropped during the two-step resolution
    pub image_set_failures: usize,
    /// Binaries skipped for not being PNG
    pub images_skipped: usize,
    /// Binaries that could not be downloaded
    pub download_failures: usize,
    /// Detector calls that failed
    pub detection_failures: usize,
    /// Images that completed detection
    pub images_inspected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(images: Vec<InspectedImage>) -> ReportEntry {
        ReportEntry {
            notification: Notification {
                id: "n1".into(),
                api_url: "http://api/content/n1".into(),
                last_modified: None,
            },
            article: ArticleSummary {
                id: "n1".into(),
                title: "t".into(),
                author: None,
                url: None,
            },
            images,
        }
    }

    #[test]
    fn test_entry_without_stamps_is_not_alertable() {
        let e = entry(vec![InspectedImage {
            uri: "u".into(),
            stamps: vec![],
        }]);
        assert!(!e.has_stamps());
        assert_eq!(e.stamps().count(), 0);
    }

    #[test]
    fn test_stamped_entries_filter() {
        let stamped = entry(vec![InspectedImage {
            uri: "u".into(),
            stamps: vec![Stamp(serde_json::json!({"tool": "nightingale"}))],
        }]);
        let plain = entry(vec![]);
        let report = PollCycleReport {
            entries: vec![plain, stamped],
            outcome: CrawlOutcome::default(),
        };
        assert_eq!(report.stamped_entries().count(), 1);
    }
}
