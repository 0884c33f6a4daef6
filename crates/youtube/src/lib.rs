pub mod models;

use async_trait::async_trait;
use common::{http, Article, Config, NewsError, NewsProvider, NewsResult};
use models::{SearchResponse, SearchResult};
use tracing::info;

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const MAX_RESULTS: usize = 5;

pub struct YouTubeProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    query: String,
}

impl YouTubeProvider {
    pub fn new(config: &Config) -> NewsResult<Self> {
        Ok(Self {
            client: http::build_client(config.request_timeout)?,
            api_key: config.youtube_api_key.clone(),
            query: config.query.clone(),
        })
    }

    fn to_article(result: SearchResult) -> Article {
        let video_id = result
            .id
            .and_then(|id| id.video_id)
            .unwrap_or_default();
        let snippet = result.snippet.unwrap_or_default();

        let source = match snippet.channel_title.filter(|c| !c.is_empty()) {
            Some(channel) => format!("YouTube · {}", channel),
            None => "YouTube".to_string(),
        };

        Article {
            title: snippet.title.unwrap_or_default(),
            description: snippet.description.unwrap_or_default(),
            url: if video_id.is_empty() {
                String::new()
            } else {
                format!("{}{}", YOUTUBE_WATCH_URL, video_id)
            },
            image: snippet
                .thumbnails
                .and_then(|thumbnails| thumbnails.best_url())
                .unwrap_or_default(),
            published_at: snippet.published_at.unwrap_or_default(),
            source,
            translate: false,
        }
    }
}

#[async_trait]
impl NewsProvider for YouTubeProvider {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn budget(&self) -> usize {
        8
    }

    async fn fetch(&self) -> NewsResult<Vec<Article>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NewsError::MissingCredential("YouTube"))?;

        let query = format!("{} 뉴스", self.query);
        info!("Searching YouTube for '{}'", query);
        let max_results = MAX_RESULTS.to_string();
        let request = self.client.get(YOUTUBE_SEARCH_URL).query(&[
            ("part", "snippet"),
            ("type", "video"),
            ("order", "date"),
            ("regionCode", "KR"),
            ("relevanceLanguage", "ko"),
            ("q", query.as_str()),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ]);

        let response: SearchResponse = http::send_json(self.name(), request).await?;
        Ok(response.items.into_iter().map(Self::to_article).collect())
    }
}
