//! Notification feed data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope of the notification feed endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// One feed entry pointing at a content item that changed since the last
/// poll. Ephemeral; consumed once per poll cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Content item identifier
    pub id: String,

    /// Full API URL of the article document
    pub api_url: String,

    /// When the content item last changed, if the feed reports it
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}
