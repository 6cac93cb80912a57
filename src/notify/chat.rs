// src/notify/chat.rs

//! Chat webhook sink (Slack-style `{"text": ...}` payload).

use async_trait::async_trait;
use reqwest::Client;

use super::{AlertSink, ArticleAlert};
use crate::error::{AppError, Result};
use crate::models::NotifyConfig;

pub struct ChatNotifier {
    webhook_url: String,
    client: Client,
}

impl ChatNotifier {
    /// Build the sink if a webhook URL is configured.
    pub fn from_config(config: &NotifyConfig) -> Option<Self> {
        config.chat_webhook_url.as_ref().map(|url| Self {
            webhook_url: url.clone(),
            client: Client::new(),
        })
    }

    fn message(alert: &ArticleAlert) -> String {
        let mut text = format!(
            "<!channel>\nStamped chart published in article \"{}\"",
            alert.title
        );
        if let Some(url) = &alert.url {
            text.push_str(&format!("\n<{url}|{}>", alert.title));
        }
        if let Some(author) = &alert.author {
            text.push_str(&format!("\nAuthor: {author}"));
        }
        if !alert.images.is_empty() {
            text.push_str(&format!("\nImages to review: {}", alert.images.join(", ")));
        }
        text
    }
}

#[async_trait]
impl AlertSink for ChatNotifier {
    async fn send(&self, alert: &ArticleAlert) -> Result<()> {
        let body = serde_json::json!({ "text": Self::message(alert) });

        self.client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::notify(format!("chat webhook post: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::notify(format!("chat webhook non-2xx: {e}")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}
