pub mod models;

use async_trait::async_trait;
use common::{http, Article, Config, NewsError, NewsProvider, NewsResult};
use models::GNewsResponse;
use tracing::info;

const GNEWS_TOP_HEADLINES_URL: &str = "https://gnews.io/api/v4/top-headlines";
const MAX_ARTICLES: usize = 10;

pub struct GNewsProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl GNewsProvider {
    pub fn new(config: &Config) -> NewsResult<Self> {
        Ok(Self {
            client: http::build_client(config.request_timeout)?,
            api_key: config.gnews_api_key.clone(),
        })
    }

    fn to_articles(response: GNewsResponse) -> Vec<Article> {
        response
            .articles
            .into_iter()
            .map(|item| Article {
                title: item.title.unwrap_or_default(),
                description: item.description.unwrap_or_default(),
                url: item.url.unwrap_or_default(),
                image: item.image.unwrap_or_default(),
                published_at: item.published_at.unwrap_or_default(),
                source: item
                    .source
                    .and_then(|source| source.name)
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "GNews".to_string()),
                translate: true,
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for GNewsProvider {
    fn name(&self) -> &'static str {
        "GNews"
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
            .ok_or(NewsError::MissingCredential("GNews"))?;

        info!("Fetching top headlines from GNews");
        let max = MAX_ARTICLES.to_string();
        let request = self.client.get(GNEWS_TOP_HEADLINES_URL).query(&[
            ("lang", "en"),
            ("max", max.as_str()),
            ("apikey", api_key),
        ]);

        let response: GNewsResponse = http::send_json(self.name(), request).await?;
        Ok(Self::to_articles(response))
    }
}
