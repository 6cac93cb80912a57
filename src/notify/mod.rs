//! Outbound notifications for stamped articles.
//!
//! The crawl pipeline's only obligation is to hand every report entry with
//! at least one stamped image to the configured sinks. Sinks are optional;
//! a sink without configuration is disabled and a failing sink is logged,
//! never fatal to the poll loop.

mod chat;
mod tasks;

pub use chat::ChatNotifier;
pub use tasks::TaskNotifier;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NotifyConfig, ReportEntry};

/// The article-with-stamps shape handed to each sink.
#[derive(Debug, Clone)]
pub struct ArticleAlert {
    pub title: String,
    pub url: Option<String>,
    pub author: Option<String>,
    /// URIs of the stamped images, in discovery order
    pub images: Vec<String>,
}

impl ArticleAlert {
    /// Build an alert from a report entry, keeping only stamped images.
    pub fn from_entry(entry: &ReportEntry) -> Self {
        Self {
            title: entry.article.title.clone(),
            url: entry.article.url.clone(),
            author: entry.article.author.clone(),
            images: entry
                .images
                .iter()
                .filter(|image| image.has_stamps())
                .map(|image| image.uri.clone())
                .collect(),
        }
    }
}

/// One outbound notification channel.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send(&self, alert: &ArticleAlert) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Fans one alert out to every configured sink, logging per-sink failures.
pub struct AlertFanout {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl AlertFanout {
    pub fn from_config(config: &NotifyConfig) -> Self {
        let mut sinks: Vec<Box<dyn AlertSink>> = Vec::new();
        if let Some(chat) = ChatNotifier::from_config(config) {
            sinks.push(Box::new(chat));
        }
        if let Some(tasks) = TaskNotifier::from_config(config) {
            sinks.push(Box::new(tasks));
        }
        if sinks.is_empty() {
            tracing::warn!("no notification sinks configured, alerts will only be logged");
        }
        Self { sinks }
    }

    pub async fn send(&self, alert: &ArticleAlert) {
        tracing::info!(
            title = %alert.title,
            images = alert.images.len(),
            "stamped article alert"
        );
        for sink in &self.sinks {
            if let Err(error) = sink.send(alert).await {
                tracing::error!(sink = sink.name(), %error, "alert delivery failed");
            }
        }
    }
}
