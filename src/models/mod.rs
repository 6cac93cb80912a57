// src/models/mod.rs

//! Domain models for the publish-alert service.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod image;
mod notification;
mod report;

// Re-export all public types
pub use article::{Article, ArticleSummary};
pub use config::{
    Config, CrawlerConfig, FeedConfig, NotifyConfig, PollConfig, ServerConfig, StamperConfig,
};
pub use image::{ImageBinary, ImageMember, ImageSet, ImageSetMemberRef};
pub use notification::{FeedPage, Notification};
pub use report::{CrawlOutcome, InspectedImage, PollCycleReport, ReportEntry, Stamp};
