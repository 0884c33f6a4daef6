pub mod models;

use async_trait::async_trait;
use common::{http, Article, Config, NewsError, NewsProvider, NewsResult};
use models::NewsApiResponse;
use tracing::info;

const NEWSAPI_TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";
const PAGE_SIZE: usize = 10;
/// Title NewsAPI substitutes for articles that were taken down.
const REMOVED_TITLE: &str = "[Removed]";

pub struct NewsApiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl NewsApiProvider {
    pub fn new(config: &Config) -> NewsResult<Self> {
        Ok(Self {
            client: http::build_client(config.request_timeout)?,
            api_key: config.news_api_key.clone(),
        })
    }

    fn to_articles(response: NewsApiResponse) -> Vec<Article> {
        response
            .articles
            .into_iter()
            .filter(|item| item.title.as_deref() != Some(REMOVED_TITLE))
            .map(|item| Article {
                title: item.title.unwrap_or_default(),
                description: item.description.unwrap_or_default(),
                url: item.url.unwrap_or_default(),
                image: item.url_to_image.unwrap_or_default(),
                published_at: item.published_at.unwrap_or_default(),
                source: item
                    .source
                    .and_then(|source| source.name)
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "NewsAPI".to_string()),
                translate: true,
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    fn name(&self) -> &'static str {
        "NewsAPI"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn budget(&self) -> usize {
        5
    }

    async fn fetch(&self) -> NewsResult<Vec<Article>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NewsError::MissingCredential("NewsAPI"))?;

        info!("Fetching top headlines from NewsAPI");
        let page_size = PAGE_SIZE.to_string();
        let request = self
            .client
            .get(NEWSAPI_TOP_HEADLINES_URL)
            .header("X-Api-Key", api_key)
            .query(&[("country", "us"), ("pageSize", page_size.as_str())]);

        let response: NewsApiResponse = http::send_json(self.name(), request).await?;
        if response.status.as_deref() == Some("error") {
            return Err(NewsError::Api("NewsAPI reported an error status".to_string()));
        }
        Ok(Self::to_articles(response))
    }
}
