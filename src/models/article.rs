//! Article data structures.

use serde::{Deserialize, Serialize};

/// Full article document for one notification.
///
/// Owned transiently by the fetch → resolve hand-off; only the body markup
/// and the summary fields survive into the poll cycle report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article identifier
    pub id: String,

    /// Article headline
    #[serde(default)]
    pub title: String,

    /// Author/byline, when the API reports one
    #[serde(default)]
    pub byline: Option<String>,

    /// Public-facing article URL
    #[serde(default)]
    pub web_url: Option<String>,

    /// Body markup containing embedded image-set references
    #[serde(rename = "bodyXML", default)]
    pub body_xml: String,
}

/// The slice of an article that is kept in the report and handed to the
/// outbound notifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: Option<String>,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            author: article.byline.clone(),
            url: article.web_url.clone(),
        }
    }
}
