use common::{Article, LanguageModel, NewsItem};
use tracing::{info, warn};

use crate::rating::rate;
use crate::tags::classify;

/// Descriptions that were not summarized are cut to this many characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Translates, summarizes, rates and tags articles.
pub struct Enricher {
    model: Option<Box<dyn LanguageModel>>,
}

impl Enricher {
    pub fn new(model: Option<Box<dyn LanguageModel>>) -> Self {
        if let Some(model) = &model {
            if !model.is_configured() {
                info!("{} is not configured; articles will not be translated", model.name());
            }
        }
        Self { model }
    }

    /// An enricher that never calls a language model.
    pub fn offline() -> Self {
        Self { model: None }
    }

    pub async fn enrich(&self, mut article: Article) -> NewsItem {
        if article.translate {
            self.localize(&mut article).await;
        }

        let rating = rate(&article.title, &article.description);
        let tags = classify(&article.title, &article.description);
        article.into_news_item(rating, tags)
    }

    async fn localize(&self, article: &mut Article) {
        let mut summarized = false;

        if let Some(model) = self.model.as_deref().filter(|m| m.is_configured()) {
            if !article.title.trim().is_empty() {
                match model.translate(&article.title).await {
                    Ok(title) => article.title = title,
                    Err(e) => warn!("Translating '{}' failed: {}", article.title, e),
                }
            }

            if !article.description.trim().is_empty() {
                match model.summarize(&article.description).await {
                    Ok(summary) => {
                        article.description = summary;
                        summarized = true;
                    }
                    Err(e) => warn!("Summarizing '{}' failed: {}", article.title, e),
                }
            }
        }

        if !summarized {
            article.description = truncate_chars(&article.description, DESCRIPTION_PREVIEW_CHARS);
        }
    }
}
