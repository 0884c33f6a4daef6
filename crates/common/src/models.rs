use serde::{Deserialize, Serialize};

/// A headline as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub published_at: String,
    pub source: String,
    pub rating: f64,
    pub tags: Vec<String>,
}

/// A provider's item mapped into the common shape, before rating and tagging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub published_at: String,
    pub source: String,
    /// Set when the content is not in Korean and should go through the
    /// language model.
    pub translate: bool,
}

impl Article {
    pub fn into_news_item(self, rating: f64, tags: Vec<String>) -> NewsItem {
        NewsItem {
            title: self.title,
            description: self.description,
            url: self.url,
            image: self.image,
            published_at: self.published_at,
            source: self.source,
            rating,
            tags,
        }
    }
}
