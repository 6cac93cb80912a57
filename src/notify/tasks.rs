// src/notify/tasks.rs

//! Task tracker sink: files one review task per stamped article.

use async_trait::async_trait;
use reqwest::Client;

use super::{AlertSink, ArticleAlert};
use crate::error::{AppError, Result};
use crate::models::NotifyConfig;

pub struct TaskNotifier {
    api_url: String,
    token: String,
    project: Option<String>,
    client: Client,
}

impl TaskNotifier {
    /// Build the sink if the task API URL and token are both configured.
    pub fn from_config(config: &NotifyConfig) -> Option<Self> {
        match (&config.task_api_url, &config.task_api_token) {
            (Some(api_url), Some(token)) => Some(Self {
                api_url: api_url.trim_end_matches('/').to_string(),
                token: token.clone(),
                project: config.task_project.clone(),
                client: Client::new(),
            }),
            _ => None,
        }
    }

    fn task_body(&self, alert: &ArticleAlert) -> serde_json::Value {
        let mut notes = alert.url.clone().unwrap_or_default();
        if let Some(author) = &alert.author {
            notes.push_str(&format!("\nAuthor: {author}"));
        }
        for image in &alert.images {
            notes.push_str(&format!("\nImage: {image}"));
        }

        let mut data = serde_json::json!({
            "name": format!("Stamped chart published in article \"{}\"", alert.title),
            "notes": notes,
        });
        if let Some(project) = &self.project {
            data["projects"] = serde_json::json!([project]);
        }
        serde_json::json!({ "data": data })
    }
}

#[async_trait]
impl AlertSink for TaskNotifier {
    async fn send(&self, alert: &ArticleAlert) -> Result<()> {
        let url = format!("{}/tasks", self.api_url);

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&self.task_body(alert))
            .send()
            .await
            .map_err(|e| AppError::notify(format!("task create post: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::notify(format!("task create non-2xx: {e}")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tasks"
    }
}
